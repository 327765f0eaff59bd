//! Speech synthesis parameters

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Playback parameters for a spoken response
///
/// Ranges follow the usual synthesis engine limits: rate 0.1–10.0,
/// pitch 0.0–2.0, volume 0.0–1.0. The defaults speak at neutral settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeechParams {
    /// Speech speed multiplier
    #[serde(default = "default_rate")]
    pub rate: f32,
    /// Voice pitch
    #[serde(default = "default_pitch")]
    pub pitch: f32,
    /// Playback volume
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_rate() -> f32 {
    1.0
}

fn default_pitch() -> f32 {
    1.0
}

fn default_volume() -> f32 {
    1.0
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

impl SpeechParams {
    /// Validate the parameters against the permitted ranges
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(0.1..=10.0).contains(&self.rate) {
            return Err(DomainError::InvalidSpeechParameter(format!(
                "rate {} outside 0.1..=10.0",
                self.rate
            )));
        }
        if !(0.0..=2.0).contains(&self.pitch) {
            return Err(DomainError::InvalidSpeechParameter(format!(
                "pitch {} outside 0.0..=2.0",
                self.pitch
            )));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(DomainError::InvalidSpeechParameter(format!(
                "volume {} outside 0.0..=1.0",
                self.volume
            )));
        }
        Ok(())
    }
}
