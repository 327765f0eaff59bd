//! Alarm time-expression extraction
//!
//! Pulls a time phrase out of an alarm/reminder utterance: either a
//! clock form (`7:30`) or a number followed by `am`, `pm`, `hour`, or
//! `minute` (`6 am`, `10 minutes` yields `10 minute`). Returns the first
//! phrase found, scanning left to right.

const UNIT_WORDS: [&str; 4] = ["am", "pm", "hour", "minute"];

/// Extract the first time expression from a normalized utterance
pub fn extract_time_phrase(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        // Clock form: digits, a colon, more digits
        if i < bytes.len() && bytes[i] == b':' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > i + 1 {
                return Some(input[start..j].to_string());
            }
        }

        // Unit form: digits, optional whitespace, then a unit word
        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        for unit in UNIT_WORDS {
            if input[j..].starts_with(unit) {
                return Some(input[start..j + unit.len()].to_string());
            }
        }
    }
    None
}
