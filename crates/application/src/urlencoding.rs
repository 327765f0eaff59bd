//! URL encoding utility for query parameters
//!
//! Used to build the search, YouTube, and maps URLs opened as side
//! effects of the corresponding intents.

use std::fmt::Write as _;

/// Percent-encode a string for use in URL query parameters
///
/// Encodes every byte except unreserved characters (`A-Z`, `a-z`, `0-9`,
/// `-`, `_`, `.`, `~`). Spaces are encoded as `+`.
pub fn encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for b in input.bytes() {
        match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(b));
            },
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{b:02X}");
            },
        }
    }
    out
}
