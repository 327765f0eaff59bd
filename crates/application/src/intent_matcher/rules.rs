//! The standard rule table, in evaluation order
//!
//! Ordering encodes priority and must not be rearranged: overlapping
//! keyword sets (call/phone before search, battery before volume) make
//! the order observable behavior.

use domain::{Intent, VolumeDirection};

use super::IntentRule;
use crate::time_phrase::extract_time_phrase;

/// Remove every occurrence of the given words and trim the remainder
fn strip_words(input: &str, words: &[&str]) -> String {
    let mut remainder = input.to_string();
    for word in words {
        remainder = remainder.replace(word, "");
    }
    remainder.trim().to_string()
}

/// Turn an extracted remainder into a capture, treating empty as absent
fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

/// Build the ordered rule table
pub(super) fn build_rules() -> Vec<IntentRule> {
    vec![
        IntentRule {
            name: "time",
            keywords: &["time"],
            builder: |_| Some(Intent::CurrentTime),
        },
        IntentRule {
            name: "date",
            keywords: &["date"],
            builder: |_| Some(Intent::CurrentDate),
        },
        IntentRule {
            name: "call",
            keywords: &["call", "phone"],
            builder: |input| {
                let contact = strip_words(input, &["call", "phone", "contact"]);
                Some(Intent::PlaceCall {
                    contact: non_empty(contact),
                })
            },
        },
        IntentRule {
            name: "message",
            keywords: &["message", "text"],
            builder: |_| Some(Intent::SendMessage),
        },
        IntentRule {
            name: "camera",
            keywords: &["open"],
            builder: |input| {
                (input.contains("camera") || input.contains("photo"))
                    .then_some(Intent::OpenCamera)
            },
        },
        IntentRule {
            name: "battery",
            keywords: &["battery"],
            builder: |_| Some(Intent::BatteryStatus),
        },
        IntentRule {
            name: "volume",
            keywords: &["volume"],
            // No unconditional default: "volume" alone falls through
            builder: |input| {
                if input.contains("up") || input.contains("increase") {
                    return Some(Intent::AdjustVolume {
                        direction: VolumeDirection::Up,
                    });
                }
                if input.contains("down") || input.contains("decrease") {
                    return Some(Intent::AdjustVolume {
                        direction: VolumeDirection::Down,
                    });
                }
                if input.contains("mute") {
                    return Some(Intent::AdjustVolume {
                        direction: VolumeDirection::Mute,
                    });
                }
                None
            },
        },
        IntentRule {
            name: "brightness",
            keywords: &["brightness"],
            builder: |_| Some(Intent::AdjustBrightness),
        },
        IntentRule {
            name: "wifi",
            keywords: &["wifi", "wi-fi"],
            builder: |_| Some(Intent::WifiSettings),
        },
        IntentRule {
            name: "bluetooth",
            keywords: &["bluetooth"],
            builder: |_| Some(Intent::BluetoothSettings),
        },
        IntentRule {
            name: "alarm",
            keywords: &["alarm", "reminder"],
            builder: |input| {
                Some(Intent::SetAlarm {
                    time_phrase: extract_time_phrase(input),
                })
            },
        },
        IntentRule {
            name: "search",
            keywords: &["search", "google"],
            builder: |input| {
                let query = strip_words(input, &["search", "google", "for"]);
                Some(Intent::WebSearch {
                    query: non_empty(query),
                })
            },
        },
        IntentRule {
            name: "youtube",
            keywords: &["youtube"],
            builder: |input| {
                let query = strip_words(input, &["youtube", "open", "play", "on"]);
                Some(Intent::OpenYouTube {
                    query: non_empty(query),
                })
            },
        },
        IntentRule {
            name: "weather",
            keywords: &["weather"],
            builder: |_| Some(Intent::Weather),
        },
        IntentRule {
            name: "navigate",
            keywords: &["navigate", "directions"],
            builder: |input| {
                let destination = strip_words(input, &["navigate", "directions", "to"]);
                Some(Intent::Navigate {
                    destination: non_empty(destination),
                })
            },
        },
        IntentRule {
            name: "greeting",
            keywords: &["hello", "hey jarvis", "hi jarvis"],
            builder: |_| Some(Intent::Greeting),
        },
        IntentRule {
            name: "help",
            keywords: &["help", "what can you do"],
            builder: |_| Some(Intent::Help),
        },
    ]
}
