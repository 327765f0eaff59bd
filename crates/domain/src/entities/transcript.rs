//! Transcript entity - the append-only conversation log

use serde::{Deserialize, Serialize};

use super::{Speaker, Turn};

/// Ordered log of conversational turns
///
/// Insertion order is conversational order. The log is append-only: turns
/// are never mutated or removed, and display trimming (`recent`) is a view
/// over stored turns, not a deletion. Alternation between user and
/// assistant is not enforced; quick commands fired while speech input is
/// active can legitimately produce consecutive user turns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn to the log
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns, oldest first
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent `n` turns, for display
    pub fn recent(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// The most recent turn, if any
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// The most recent user turn, if any
    pub fn last_user_turn(&self) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| t.speaker == Speaker::User)
    }

    /// Number of stored turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transcript_is_empty() {
        let log = Transcript::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut log = Transcript::new();
        log.push(Turn::user("first"));
        log.push(Turn::assistant("second"));
        log.push(Turn::user("third"));

        let texts: Vec<_> = log.turns().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn recent_returns_a_window_without_deleting() {
        let mut log = Transcript::new();
        for i in 0..8 {
            log.push(Turn::user(format!("turn {i}")));
        }

        let window = log.recent(5);
        assert_eq!(window.len(), 5);
        assert_eq!(window[0].text, "turn 3");
        // Storage is untouched by display trimming
        assert_eq!(log.len(), 8);
    }

    #[test]
    fn recent_with_large_window_returns_everything() {
        let mut log = Transcript::new();
        log.push(Turn::user("only"));
        assert_eq!(log.recent(100).len(), 1);
    }

    #[test]
    fn alternation_is_not_enforced() {
        let mut log = Transcript::new();
        log.push(Turn::user("first command"));
        log.push(Turn::user("second command"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[1].speaker, Speaker::User);
    }

    #[test]
    fn last_user_turn_skips_assistant_turns() {
        let mut log = Transcript::new();
        log.push(Turn::user("question"));
        log.push(Turn::assistant("answer"));

        assert_eq!(log.last().unwrap().text, "answer");
        assert_eq!(log.last_user_turn().unwrap().text, "question");
    }
}
