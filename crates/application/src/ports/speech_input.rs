//! Speech input port - Interface to the continuous recognition stream

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tokio::sync::mpsc;

use crate::error::ApplicationError;

/// One event emitted by the recognition stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// A partial fragment; display-only, may still be revised
    Interim(String),
    /// A fragment the recognizer marks as complete, ready for processing
    Final(String),
    /// Recognition failure carrying the engine's error code
    Error(String),
}

/// Port for continuous speech-to-text recognition
///
/// The stream is an ongoing background source; the controller reacts to
/// each event as it arrives rather than awaiting individual requests.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechInputPort: Send + Sync {
    /// Start recognition
    ///
    /// Events arrive on the returned channel until `stop` is called or the
    /// stream ends. Each `start` produces a fresh stream instance.
    async fn start(&self) -> Result<mpsc::Receiver<RecognitionEvent>, ApplicationError>;

    /// Stop recognition immediately
    ///
    /// The current stream instance issues no further events after this
    /// returns; any pending interim fragment is discarded by the caller.
    async fn stop(&self) -> Result<(), ApplicationError>;
}
