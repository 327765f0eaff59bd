//! Intent matcher - Ordered first-match-wins command classification
//!
//! The matcher owns a fixed, ordered list of rules. Rule order is part of
//! the observable contract: an utterance matching several rules gets the
//! earliest one (saying "what time and date is it" reports the time).

mod rules;

use std::fmt;

use domain::Intent;
use tracing::debug;

/// A single classification rule
///
/// `keywords` is a cheap containment gate; `builder` performs the full
/// check and any substring capture. A builder may return `None` to let
/// evaluation continue with later rules (the volume rule relies on this
/// when none of up/down/mute is present).
pub(crate) struct IntentRule {
    /// Rule name, for logs and the CLI rule listing
    pub name: &'static str,
    /// Keywords that gate this rule
    pub keywords: &'static [&'static str],
    /// Function to build the intent from the normalized utterance
    pub builder: fn(&str) -> Option<Intent>,
}

/// Classifier mapping a normalized utterance to exactly one intent
///
/// Classification is total: the trailing fallback produces
/// [`Intent::Unknown`] echoing the heard utterance, so every input string
/// (the empty string included) yields an intent.
pub struct IntentMatcher {
    rules: Vec<IntentRule>,
}

impl fmt::Debug for IntentMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentMatcher")
            .field("rule_count", &self.rules.len())
            .finish()
    }
}

impl IntentMatcher {
    /// Create a matcher with the standard rule table
    pub fn new() -> Self {
        Self {
            rules: rules::build_rules(),
        }
    }

    /// Classify a normalized (lowercased, trimmed) utterance
    ///
    /// The input is assumed pre-normalized; feeding already-normalized
    /// text back through normalization is a no-op, so the two compose.
    pub fn classify(&self, input: &str) -> Intent {
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| input.contains(kw)) {
                if let Some(intent) = (rule.builder)(input) {
                    debug!(rule = rule.name, "Matched intent rule");
                    return intent;
                }
            }
        }
        Intent::Unknown {
            heard: input.to_string(),
        }
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use domain::VolumeDirection;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn classifies_time() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("what time is it"), Intent::CurrentTime);
    }

    #[test]
    fn classifies_date() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("what's the date today"), Intent::CurrentDate);
    }

    #[test]
    fn time_beats_date_on_overlap() {
        // Rule order is the contract: "time" is evaluated before "date"
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("what time and date is it"),
            Intent::CurrentTime
        );
    }

    #[test]
    fn call_extracts_contact() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("call mom"),
            Intent::PlaceCall {
                contact: Some("mom".to_string())
            }
        );
    }

    #[test]
    fn bare_call_has_no_contact() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("call"), Intent::PlaceCall { contact: None });
    }

    #[test]
    fn phone_also_triggers_call() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("phone dad"),
            Intent::PlaceCall {
                contact: Some("dad".to_string())
            }
        );
    }

    #[test]
    fn call_beats_search_on_overlap() {
        let matcher = IntentMatcher::new();
        assert!(matches!(
            matcher.classify("call the search line"),
            Intent::PlaceCall { .. }
        ));
    }

    #[test]
    fn message_and_text_trigger_messaging() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("send a message"), Intent::SendMessage);
        assert_eq!(matcher.classify("text john"), Intent::SendMessage);
    }

    #[test]
    fn open_camera_needs_both_words() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("open the camera"), Intent::OpenCamera);
        assert_eq!(matcher.classify("open a photo"), Intent::OpenCamera);
    }

    #[test]
    fn open_without_camera_falls_through() {
        // "open youtube" passes the camera rule's gate but not its builder
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("open youtube"),
            Intent::OpenYouTube { query: None }
        );
    }

    #[test]
    fn classifies_battery() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("check battery"), Intent::BatteryStatus);
    }

    #[test]
    fn volume_directions() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("volume up"),
            Intent::AdjustVolume {
                direction: VolumeDirection::Up
            }
        );
        assert_eq!(
            matcher.classify("decrease the volume"),
            Intent::AdjustVolume {
                direction: VolumeDirection::Down
            }
        );
        assert_eq!(
            matcher.classify("volume mute"),
            Intent::AdjustVolume {
                direction: VolumeDirection::Mute
            }
        );
    }

    #[test]
    fn bare_volume_falls_through_to_fallback() {
        // No unconditional default in the volume rule
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("volume"),
            Intent::Unknown {
                heard: "volume".to_string()
            }
        );
    }

    #[test]
    fn settings_rules() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("lower brightness"), Intent::AdjustBrightness);
        assert_eq!(matcher.classify("turn on wifi"), Intent::WifiSettings);
        assert_eq!(matcher.classify("enable wi-fi"), Intent::WifiSettings);
        assert_eq!(matcher.classify("bluetooth on"), Intent::BluetoothSettings);
    }

    #[test]
    fn alarm_captures_time_phrase() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("set alarm for 7:30"),
            Intent::SetAlarm {
                time_phrase: Some("7:30".to_string())
            }
        );
    }

    #[test]
    fn reminder_without_time_is_generic() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("set a reminder"),
            Intent::SetAlarm { time_phrase: None }
        );
    }

    #[test]
    fn search_extracts_query() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("search for cats"),
            Intent::WebSearch {
                query: Some("cats".to_string())
            }
        );
        assert_eq!(
            matcher.classify("google rust"),
            Intent::WebSearch {
                query: Some("rust".to_string())
            }
        );
    }

    #[test]
    fn bare_search_has_no_query() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("search"), Intent::WebSearch { query: None });
    }

    #[test]
    fn youtube_extracts_query() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("play lo-fi beats youtube"),
            Intent::OpenYouTube {
                query: Some("lo-fi beats".to_string())
            }
        );
        assert_eq!(
            matcher.classify("youtube"),
            Intent::OpenYouTube { query: None }
        );
    }

    #[test]
    fn weather_is_redirected() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("what's the weather"), Intent::Weather);
    }

    #[test]
    fn navigate_extracts_destination() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("navigate to berlin"),
            Intent::Navigate {
                destination: Some("berlin".to_string())
            }
        );
        assert_eq!(
            matcher.classify("directions"),
            Intent::Navigate { destination: None }
        );
    }

    #[test]
    fn greeting_forms() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("hello"), Intent::Greeting);
        assert_eq!(matcher.classify("hey jarvis"), Intent::Greeting);
        assert_eq!(matcher.classify("hi jarvis"), Intent::Greeting);
    }

    #[test]
    fn help_forms() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.classify("help"), Intent::Help);
        assert_eq!(matcher.classify("what can you do"), Intent::Help);
    }

    #[test]
    fn unmatched_input_echoes_in_fallback() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify("make me a sandwich"),
            Intent::Unknown {
                heard: "make me a sandwich".to_string()
            }
        );
    }

    #[test]
    fn empty_input_hits_fallback() {
        let matcher = IntentMatcher::new();
        assert_eq!(
            matcher.classify(""),
            Intent::Unknown {
                heard: String::new()
            }
        );
    }

    #[test]
    fn rule_names_are_in_evaluation_order() {
        let matcher = IntentMatcher::new();
        let names = matcher.rule_names();
        assert_eq!(names.first(), Some(&"time"));
        assert_eq!(names.last(), Some(&"help"));
        let time_pos = names.iter().position(|n| *n == "time").unwrap();
        let date_pos = names.iter().position(|n| *n == "date").unwrap();
        assert!(time_pos < date_pos);
    }

    proptest! {
        #[test]
        fn classification_is_total(input in ".{0,120}") {
            let matcher = IntentMatcher::new();
            // Must never panic; the fallback guarantees an intent
            let _ = matcher.classify(&input.to_lowercase());
        }

        #[test]
        fn classification_is_deterministic(input in "[a-z ]{0,60}") {
            let matcher = IntentMatcher::new();
            prop_assert_eq!(matcher.classify(&input), matcher.classify(&input));
        }
    }
}
