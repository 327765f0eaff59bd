//! Console speech adapters
//!
//! The terminal stands in for the speech engines: each stdin line is one
//! final transcript, and "playback" prints the response. Null variants
//! exist for one-shot commands that need no live stream.

#![allow(clippy::print_stdout)]

use application::{
    error::ApplicationError,
    ports::{RecognitionEvent, SpeechInputPort, SpeechOutputPort},
};
use async_trait::async_trait;
use domain::SpeechParams;
use parking_lot::Mutex;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::mpsc,
    task::JoinHandle,
};
use tracing::debug;

/// Recognizer fed by stdin lines
///
/// Every line read is emitted as a final transcript; a read failure is
/// surfaced as a recognition error event. `stop` aborts the reader task,
/// which closes the event channel, so a stopped stream instance issues no
/// further events.
#[derive(Debug, Default)]
pub struct ConsoleSpeechInput {
    reader: Mutex<Option<JoinHandle<()>>>,
}

impl ConsoleSpeechInput {
    /// Create a stdin-backed recognizer
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpeechInputPort for ConsoleSpeechInput {
    async fn start(&self) -> Result<mpsc::Receiver<RecognitionEvent>, ApplicationError> {
        let (tx, rx) = mpsc::channel(16);
        let handle = tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(RecognitionEvent::Final(line)).await.is_err() {
                            break;
                        }
                    },
                    Ok(None) => break,
                    Err(e) => {
                        let _ = tx.send(RecognitionEvent::Error(e.to_string())).await;
                        break;
                    },
                }
            }
        });

        if let Some(previous) = self.reader.lock().replace(handle) {
            previous.abort();
        }
        debug!("Console recognition started");
        Ok(rx)
    }

    async fn stop(&self) -> Result<(), ApplicationError> {
        if let Some(handle) = self.reader.lock().take() {
            handle.abort();
        }
        debug!("Console recognition stopped");
        Ok(())
    }
}

/// Synthesizer that prints instead of speaking
#[derive(Debug, Default)]
pub struct ConsoleSpeechOutput;

impl ConsoleSpeechOutput {
    /// Create a stdout-backed synthesizer
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechOutputPort for ConsoleSpeechOutput {
    async fn cancel_current(&self) -> Result<(), ApplicationError> {
        // Printing is instantaneous; there is never playback to cancel
        Ok(())
    }

    async fn speak(&self, text: &str, params: &SpeechParams) -> Result<(), ApplicationError> {
        params.validate()?;
        println!("jarvis: {text}");
        Ok(())
    }
}

/// Recognizer whose stream ends immediately
///
/// Used by one-shot commands that inject the utterance directly.
#[derive(Debug, Default)]
pub struct NullSpeechInput;

impl NullSpeechInput {
    /// Create a recognizer with no events
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechInputPort for NullSpeechInput {
    async fn start(&self) -> Result<mpsc::Receiver<RecognitionEvent>, ApplicationError> {
        let (_tx, rx) = mpsc::channel(1);
        Ok(rx)
    }

    async fn stop(&self) -> Result<(), ApplicationError> {
        Ok(())
    }
}

/// Synthesizer that discards playback
#[derive(Debug, Default)]
pub struct NullSpeechOutput;

impl NullSpeechOutput {
    /// Create a synthesizer that plays nothing
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechOutputPort for NullSpeechOutput {
    async fn cancel_current(&self) -> Result<(), ApplicationError> {
        Ok(())
    }

    async fn speak(&self, text: &str, params: &SpeechParams) -> Result<(), ApplicationError> {
        params.validate()?;
        debug!(text_len = text.len(), "Discarding playback");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn null_input_stream_ends_immediately() {
        let input = NullSpeechInput::new();
        let mut rx = input.start().await.unwrap();
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn null_output_accepts_valid_params() {
        let output = NullSpeechOutput::new();
        assert!(output.speak("hello", &SpeechParams::default()).await.is_ok());
    }

    #[tokio::test]
    async fn null_output_rejects_invalid_params() {
        let output = NullSpeechOutput::new();
        let params = SpeechParams {
            rate: 99.0,
            ..SpeechParams::default()
        };
        assert!(output.speak("hello", &params).await.is_err());
    }

    #[tokio::test]
    async fn console_input_stop_without_start_is_fine() {
        let input = ConsoleSpeechInput::new();
        assert!(input.stop().await.is_ok());
    }
}
