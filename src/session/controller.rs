use super::status::SessionStatus;
use crate::recognition::{RecognitionError, RecognitionEvent, RecognitionProvider};
use crate::store::{SavedTranscript, StoreClient};
use crate::transcript::TranscriptAssembler;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

const MSG_UNSUPPORTED: &str = "Speech recognition is not supported on this host.";
const MSG_LISTENING: &str = "Listening...";
const MSG_STOPPED: &str = "Stopped listening.";
const MSG_NO_SPEECH: &str = "No speech detected or recognized.";
const MSG_NOTHING_TO_SAVE: &str = "Nothing to save. Please speak first.";
const MSG_SAVED: &str = "Transcription saved successfully!";

/// Orchestrates one recognition provider, the transcript assembler, and the
/// transcript store.
///
/// The controller exclusively owns the provider handle; events are consumed
/// one at a time via [`pump`](Self::pump), each processed to completion
/// before the next. Every failure is converted into the single status
/// message; none propagate out of the session.
pub struct SessionController {
    /// Identifier for this controller's lifetime, for logging
    run_id: String,

    provider: Box<dyn RecognitionProvider>,
    store: StoreClient,
    assembler: TranscriptAssembler,
    status: SessionStatus,

    /// Last significant event, overwritten each time (no history)
    message: Option<String>,

    /// Saved transcripts, most recent first; new saves are prepended
    /// client-side rather than refetched
    saved: Vec<SavedTranscript>,

    /// Event channel of the active listening run
    events: Option<mpsc::Receiver<RecognitionEvent>>,
}

impl SessionController {
    pub fn new(provider: Box<dyn RecognitionProvider>, store: StoreClient) -> Self {
        Self {
            run_id: format!("session-{}", uuid::Uuid::new_v4()),
            provider,
            store,
            assembler: TranscriptAssembler::new(),
            status: SessionStatus::default(),
            message: None,
            saved: Vec::new(),
            events: None,
        }
    }

    /// Open the session: report a missing capability and fetch the saved
    /// list. Fetch failures become a status message, not an error.
    pub async fn open(&mut self) {
        info!(
            session = %self.run_id,
            provider = self.provider.name(),
            "Opening dictation session"
        );

        if !self.provider.is_supported() {
            warn!("Recognition capability unavailable, controls disabled");
            self.status = SessionStatus::Error;
            self.message = Some(MSG_UNSUPPORTED.to_string());
        }

        match self.store.list().await {
            Ok(records) => self.saved = records,
            Err(e) => {
                error!("Failed to fetch saved transcripts: {}", e);
                self.message = Some(format!("Error fetching transcriptions: {}", e));
            }
        }
    }

    /// Begin a listening run.
    ///
    /// Clears the prior transcript and status message first, so segments
    /// only ever land on a fresh transcript. Starting while already
    /// listening is benign and only produces a message.
    pub async fn start(&mut self) {
        if !self.provider.is_supported() {
            self.message = Some(MSG_UNSUPPORTED.to_string());
            return;
        }
        if self.provider.is_listening() {
            warn!("Start requested while already listening");
            self.message = Some("Recognition already started.".to_string());
            return;
        }

        self.assembler.reset();
        self.message = None;

        match self.provider.start().await {
            Ok(rx) => {
                self.events = Some(rx);
            }
            Err(RecognitionError::AlreadyStarted) => {
                self.message = Some("Recognition already started.".to_string());
            }
            Err(e) => {
                error!("Failed to start recognition: {}", e);
                self.status = SessionStatus::Stopped;
                self.message = Some(format!("Speech recognition error: {}", e));
            }
        }
    }

    /// End the current listening run; the terminal `Ended` event drives the
    /// state transition.
    pub async fn stop(&mut self) {
        if let Err(e) = self.provider.stop().await {
            error!("Failed to stop recognition: {}", e);
            self.message = Some(format!("Speech recognition error: {}", e));
        }
    }

    /// Fold one recognition event into the session state
    pub fn handle_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Started => {
                info!(session = %self.run_id, "Listening started");
                self.status = SessionStatus::Listening;
                self.message = Some(MSG_LISTENING.to_string());
            }
            RecognitionEvent::Result(result) => {
                debug!(
                    result_index = result.result_index,
                    segments = result.segments.len(),
                    "Recognition result"
                );
                self.assembler.apply(&result);
            }
            RecognitionEvent::Error(code) => {
                error!(session = %self.run_id, "Recognition error: {}", code);
                self.status = SessionStatus::Stopped;
                self.message = Some(format!("Speech recognition error: {}", code));
            }
            RecognitionEvent::Ended => {
                info!(session = %self.run_id, "Listening ended");
                self.status = SessionStatus::Stopped;
                // Distinguish a silent run from normal completion.
                self.message = Some(if self.assembler.is_blank() {
                    MSG_NO_SPEECH.to_string()
                } else {
                    MSG_STOPPED.to_string()
                });
            }
        }
    }

    /// Process the next pending event, if any. Returns `false` once the
    /// current run's channel is exhausted.
    pub async fn pump(&mut self) -> bool {
        let Some(rx) = self.events.as_mut() else {
            return false;
        };

        match rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                true
            }
            None => {
                self.events = None;
                false
            }
        }
    }

    /// Drain the current run's events to completion
    pub async fn run_to_end(&mut self) {
        while self.pump().await {}
    }

    /// Persist the displayed transcript.
    ///
    /// A blank transcript is a no-op (no request is made). On failure the
    /// pending transcript and the saved list are left untouched so the user
    /// can retry; only a success clears the transcript and prepends the new
    /// record.
    pub async fn save(&mut self) {
        let text = self.assembler.transcript();
        if text.trim().is_empty() {
            self.message = Some(MSG_NOTHING_TO_SAVE.to_string());
            return;
        }

        match self.store.save(&text).await {
            Ok(record) => {
                info!(id = %record.id, "Transcript saved");
                self.assembler.reset();
                self.saved.insert(0, record);
                self.message = Some(MSG_SAVED.to_string());
            }
            Err(e) => {
                error!("Failed to save transcript: {}", e);
                self.message = Some(format!("Error saving transcription: {}", e));
            }
        }
    }

    /// Close the session, stopping any active capture
    pub async fn close(&mut self) {
        if self.provider.is_listening() {
            if let Err(e) = self.provider.stop().await {
                error!("Failed to stop recognition on close: {}", e);
            }
        }
        self.events = None;
        info!(session = %self.run_id, "Session closed");
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The live-merged transcript currently displayed
    pub fn transcript(&self) -> String {
        self.assembler.transcript()
    }

    /// Last status message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Saved transcripts, most recent first
    pub fn saved(&self) -> &[SavedTranscript] {
        &self.saved
    }

    pub fn is_listening(&self) -> bool {
        self.provider.is_listening()
    }

    pub fn is_supported(&self) -> bool {
        self.provider.is_supported()
    }

    /// Whether the save control should be enabled
    pub fn can_save(&self) -> bool {
        !self.assembler.is_blank()
    }
}
