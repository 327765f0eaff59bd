//! Application layer - Dialogue orchestration and ports
//!
//! Contains the intent matcher, the responder, the dialogue turn
//! controller, and the port definitions for the external collaborators
//! (speech input/output, battery capability, navigation sink).

pub mod dialogue;
pub mod error;
pub mod intent_matcher;
pub mod ports;
pub mod responder;
pub mod time_phrase;
pub mod urlencoding;

pub use dialogue::{DialogueService, SessionState};
pub use error::ApplicationError;
pub use intent_matcher::IntentMatcher;
pub use ports::*;
pub use responder::Responder;
