//! User intents - Strongly typed representations of voice commands
//!
//! Each variant is one recognizable command family. Intents are produced by
//! the intent matcher from a normalized utterance and carry any substrings
//! captured during matching (contact names, search queries, time phrases).

use serde::{Deserialize, Serialize};

/// All intents the assistant can act on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Report the current wall-clock time
    CurrentTime,

    /// Report the current date
    CurrentDate,

    /// Simulate dialing a contact
    PlaceCall {
        /// Contact name extracted from the utterance, if any
        contact: Option<String>,
    },

    /// Simulate opening the messaging interface
    SendMessage,

    /// Simulate opening the camera
    OpenCamera,

    /// Report battery level and charging state
    BatteryStatus,

    /// Simulate a volume adjustment
    AdjustVolume {
        /// Which way the volume moves
        direction: VolumeDirection,
    },

    /// Simulate a brightness adjustment
    AdjustBrightness,

    /// Simulate opening WiFi settings
    WifiSettings,

    /// Simulate opening Bluetooth settings
    BluetoothSettings,

    /// Simulate setting an alarm
    SetAlarm {
        /// Time expression extracted from the utterance, if any
        time_phrase: Option<String>,
    },

    /// Open a web search
    WebSearch {
        /// Search query, or None when the user gave no terms
        query: Option<String>,
    },

    /// Open YouTube, optionally with a search
    OpenYouTube {
        /// Search query, or None to open the home page
        query: Option<String>,
    },

    /// Weather request (redirected to search)
    Weather,

    /// Open directions to a destination
    Navigate {
        /// Destination, or None when the user gave no place
        destination: Option<String>,
    },

    /// Greeting / introduction
    Greeting,

    /// Capability summary
    Help,

    /// No rule matched; echoes the heard utterance
    Unknown {
        /// The normalized utterance as heard
        heard: String,
    },
}

/// Direction of a volume adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeDirection {
    /// Raise the volume
    Up,
    /// Lower the volume
    Down,
    /// Mute the device
    Mute,
}

impl Intent {
    /// Whether acting on this intent opens an external link
    pub const fn opens_external_link(&self) -> bool {
        matches!(
            self,
            Self::WebSearch { query: Some(_) }
                | Self::OpenYouTube { .. }
                | Self::Navigate {
                    destination: Some(_)
                }
        )
    }

    /// Get a short human-readable description of the intent
    pub fn description(&self) -> String {
        match self {
            Self::CurrentTime => "Report current time".to_string(),
            Self::CurrentDate => "Report current date".to_string(),
            Self::PlaceCall { contact } => {
                format!("Call {}", contact.as_deref().unwrap_or("contact"))
            },
            Self::SendMessage => "Open messaging".to_string(),
            Self::OpenCamera => "Open camera".to_string(),
            Self::BatteryStatus => "Report battery status".to_string(),
            Self::AdjustVolume { direction } => match direction {
                VolumeDirection::Up => "Volume up".to_string(),
                VolumeDirection::Down => "Volume down".to_string(),
                VolumeDirection::Mute => "Mute".to_string(),
            },
            Self::AdjustBrightness => "Adjust brightness".to_string(),
            Self::WifiSettings => "Open WiFi settings".to_string(),
            Self::BluetoothSettings => "Open Bluetooth settings".to_string(),
            Self::SetAlarm { time_phrase } => match time_phrase {
                Some(t) => format!("Set alarm for {t}"),
                None => "Set alarm".to_string(),
            },
            Self::WebSearch { query } => match query {
                Some(q) => format!("Search for {q}"),
                None => "Search (no terms)".to_string(),
            },
            Self::OpenYouTube { query } => match query {
                Some(q) => format!("YouTube search for {q}"),
                None => "Open YouTube".to_string(),
            },
            Self::Weather => "Weather request".to_string(),
            Self::Navigate { destination } => match destination {
                Some(d) => format!("Navigate to {d}"),
                None => "Navigate (no destination)".to_string(),
            },
            Self::Greeting => "Greeting".to_string(),
            Self::Help => "Help".to_string(),
            Self::Unknown { heard } => format!("Unknown command: {heard}"),
        }
    }
}
