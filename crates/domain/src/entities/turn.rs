//! Turn entity - one logged exchange in a conversation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// Turn spoken by the user
    User,
    /// Turn produced by the assistant
    Assistant,
}

/// A single exchange in the conversation
///
/// Immutable once created; the transcript never mutates or deletes turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Unique turn identifier
    pub id: Uuid,
    /// Who produced this turn
    pub speaker: Speaker,
    /// Turn content
    pub text: String,
    /// When the turn was created
    pub occurred_at: DateTime<Utc>,
}

impl Turn {
    /// Create a user turn
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker: Speaker::User,
            text: text.into(),
            occurred_at: Utc::now(),
        }
    }

    /// Create an assistant turn
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker: Speaker::Assistant,
            text: text.into(),
            occurred_at: Utc::now(),
        }
    }
}
