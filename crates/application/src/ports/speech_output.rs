//! Speech output port - Interface for text-to-speech playback

use async_trait::async_trait;
use domain::SpeechParams;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for text-to-speech playback
///
/// The controller follows a cancel-then-speak discipline: any currently
/// playing utterance is cancelled before a new one starts. Utterances are
/// never queued.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechOutputPort: Send + Sync {
    /// Cancel any utterance currently playing
    async fn cancel_current(&self) -> Result<(), ApplicationError>;

    /// Speak `text`, returning once playback has finished
    async fn speak(&self, text: &str, params: &SpeechParams) -> Result<(), ApplicationError>;
}
