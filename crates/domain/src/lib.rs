//! Domain layer for the JARVIS voice assistant
//!
//! Contains the conversational entities, value objects, and the typed
//! intent vocabulary. This layer has no I/O and no external collaborators.

pub mod entities;
pub mod errors;
pub mod intents;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use intents::{Intent, VolumeDirection};
pub use value_objects::*;
