//! Value objects for the voice assistant domain

mod speech_params;
mod utterance;

pub use speech_params::SpeechParams;
pub use utterance::Utterance;
