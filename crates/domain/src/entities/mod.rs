//! Conversational entities

mod transcript;
mod turn;

pub use transcript::Transcript;
pub use turn::{Speaker, Turn};
