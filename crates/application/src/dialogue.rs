//! Dialogue service - Sequences conversational turns
//!
//! Owns the session state (listening / processing / speaking / pending
//! interim text) and the transcript. One turn: clear the interim display,
//! record the user turn, classify, respond, record the assistant turn,
//! then cancel-then-speak the reply. Final transcripts are processed
//! strictly in arrival order; listening and speaking are independent
//! dimensions (the microphone is not muted while speaking).

use std::{fmt, sync::Arc};

use domain::{SpeechParams, Transcript, Turn, Utterance};
use parking_lot::RwLock;
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    intent_matcher::IntentMatcher,
    ports::{RecognitionEvent, SpeechInputPort, SpeechOutputPort},
    responder::Responder,
};

/// Observable session state, read-only to the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether the recognition stream is active
    pub listening: bool,
    /// Whether a turn is currently being matched
    pub processing: bool,
    /// Whether a response is currently being vocalized
    pub speaking: bool,
    /// Pending interim transcript fragment, if any
    pub interim: Option<String>,
}

/// Orchestrates conversational turns between the ports and the matcher
pub struct DialogueService {
    matcher: IntentMatcher,
    responder: Responder,
    speech_in: Arc<dyn SpeechInputPort>,
    speech_out: Arc<dyn SpeechOutputPort>,
    params: SpeechParams,
    state: RwLock<SessionState>,
    transcript: RwLock<Transcript>,
}

impl fmt::Debug for DialogueService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogueService")
            .field("state", &*self.state.read())
            .finish_non_exhaustive()
    }
}

impl DialogueService {
    /// Create a dialogue service with default speech parameters
    pub fn new(
        matcher: IntentMatcher,
        responder: Responder,
        speech_in: Arc<dyn SpeechInputPort>,
        speech_out: Arc<dyn SpeechOutputPort>,
    ) -> Self {
        Self::with_speech_params(matcher, responder, speech_in, speech_out, SpeechParams::default())
    }

    /// Create a dialogue service with explicit speech parameters
    pub fn with_speech_params(
        matcher: IntentMatcher,
        responder: Responder,
        speech_in: Arc<dyn SpeechInputPort>,
        speech_out: Arc<dyn SpeechOutputPort>,
        params: SpeechParams,
    ) -> Self {
        Self {
            matcher,
            responder,
            speech_in,
            speech_out,
            params,
            state: RwLock::new(SessionState::default()),
            transcript: RwLock::new(Transcript::new()),
        }
    }

    /// Snapshot of the current session state
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Snapshot of the transcript
    pub fn transcript(&self) -> Transcript {
        self.transcript.read().clone()
    }

    /// The most recent `n` turns, for display
    pub fn recent_turns(&self, n: usize) -> Vec<Turn> {
        self.transcript.read().recent(n).to_vec()
    }

    /// Start the recognition stream and enter the listening state
    ///
    /// Events from the returned channel should be fed to [`Self::run`] or
    /// [`Self::handle_event`].
    pub async fn start_listening(
        &self,
    ) -> Result<mpsc::Receiver<RecognitionEvent>, ApplicationError> {
        let events = self.speech_in.start().await?;
        self.state.write().listening = true;
        debug!("Listening started");
        Ok(events)
    }

    /// Stop the recognition stream, discarding any pending interim text
    pub async fn stop_listening(&self) -> Result<(), ApplicationError> {
        self.speech_in.stop().await?;
        let mut state = self.state.write();
        state.listening = false;
        state.interim = None;
        debug!("Listening stopped");
        Ok(())
    }

    /// Consume a recognition event stream, processing events in order
    pub async fn run(&self, mut events: mpsc::Receiver<RecognitionEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_event(event).await;
        }
    }

    /// React to a single recognition event
    pub async fn handle_event(&self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Interim(fragment) => {
                self.state.write().interim = Some(fragment);
            },
            RecognitionEvent::Final(text) => {
                self.handle_final(&text).await;
            },
            RecognitionEvent::Error(code) => {
                // The only required reaction: drop out of listening.
                // No error message is surfaced to the user.
                warn!(code, "Speech recognition error");
                self.state.write().listening = false;
            },
        }
    }

    /// Process one finalized utterance as a complete conversational turn
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn handle_final(&self, text: &str) {
        let utterance = Utterance::new(text);

        {
            let mut state = self.state.write();
            state.interim = None;
            state.processing = true;
        }
        self.transcript.write().push(Turn::user(utterance.raw()));

        let intent = self.matcher.classify(utterance.normalized());
        debug!(intent = %intent.description(), "Processing turn");
        let response = self.responder.respond(&intent).await;

        self.transcript.write().push(Turn::assistant(&response));
        self.state.write().processing = false;

        self.vocalize(&response).await;
    }

    /// Cancel any current playback, then speak the response
    ///
    /// The speaking flag tracks playback; the listening flag is left
    /// untouched, so both can be true at once.
    async fn vocalize(&self, text: &str) {
        if let Err(e) = self.speech_out.cancel_current().await {
            warn!(error = %e, "Failed to cancel current utterance");
        }

        self.state.write().speaking = true;
        if let Err(e) = self.speech_out.speak(text, &self.params).await {
            warn!(error = %e, "Speech playback failed");
        }
        self.state.write().speaking = false;
    }
}
