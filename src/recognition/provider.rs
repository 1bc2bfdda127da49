use thiserror::Error;
use tokio::sync::mpsc;

/// One unit of recognized speech with its finality flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptSegment {
    /// Recognized text for this segment
    pub text: String,

    /// Whether the engine will revise this segment further
    pub is_final: bool,
}

impl TranscriptSegment {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// A batch of segments produced by one recognition pass.
///
/// `segments` is the not-yet-finalized tail of the engine's logical results
/// list, starting at `result_index`. Segments before that index were already
/// finalized in a prior event and are never re-delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEvent {
    /// Position of the first segment in the logical results list
    pub result_index: usize,

    /// Segments from `result_index` forward
    pub segments: Vec<TranscriptSegment>,
}

/// Events delivered by a recognition session, one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Audio capture has begun
    Started,
    /// A recognition pass produced segments
    Result(ResultEvent),
    /// The engine reported an error; the session is over
    Error(String),
    /// Capture ended, either by `stop()` or by the engine
    Ended,
}

/// Configuration fixed at session creation
#[derive(Debug, Clone)]
pub struct RecognizerConfig {
    /// BCP-47 language tag for recognition
    pub language: String,

    /// Keep listening across pauses instead of ending after one utterance
    pub continuous: bool,

    /// Emit tentative (revisable) segments as well as final ones
    pub interim_results: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            continuous: true,
            interim_results: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("speech recognition is not supported on this host")]
    Unsupported,

    #[error("recognition already started")]
    AlreadyStarted,

    #[error("speech recognition error: {0}")]
    Engine(String),
}

/// Speech recognition capability
///
/// Implementations wrap a platform recognition engine (or a scripted
/// replay, see [`super::ScriptedRecognizer`]). Events are pushed over the
/// receiver returned by `start()` and must be consumed one at a time; the
/// channel closing means the session is fully torn down.
#[async_trait::async_trait]
pub trait RecognitionProvider: Send {
    /// Whether the host provides a recognition capability at all
    fn is_supported(&self) -> bool;

    /// Whether a capture session is currently active
    fn is_listening(&self) -> bool;

    /// Begin capturing audio and producing segments
    ///
    /// Returns a channel receiver that will receive recognition events,
    /// starting with [`RecognitionEvent::Started`] and terminated by
    /// [`RecognitionEvent::Ended`].
    async fn start(&mut self) -> Result<mpsc::Receiver<RecognitionEvent>, RecognitionError>;

    /// End capture gracefully
    ///
    /// A terminal `Ended` event is still delivered even if no speech was
    /// captured. Stopping an inactive session is a no-op.
    async fn stop(&mut self) -> Result<(), RecognitionError>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
