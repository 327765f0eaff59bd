//! Utterance value object - one piece of recognized speech

use serde::{Deserialize, Serialize};

/// One piece of user speech converted to text
///
/// Holds the display form (original casing, surrounding whitespace removed)
/// and the normalized form fed to the intent matcher (lowercased, trimmed).
/// Both are fixed at construction; normalization is idempotent, so feeding
/// an already-normalized string back through produces the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    raw: String,
    normalized: String,
}

impl Utterance {
    /// Create an utterance from recognized text
    pub fn new(text: impl Into<String>) -> Self {
        let raw = text.into().trim().to_string();
        let normalized = raw.to_lowercase();
        Self { raw, normalized }
    }

    /// The trimmed text in its original casing, for display
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The lowercased, trimmed text fed to the intent matcher
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether nothing usable was recognized
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}
