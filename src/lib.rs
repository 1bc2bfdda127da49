pub mod config;
pub mod recognition;
pub mod session;
pub mod store;
pub mod transcript;

pub use config::Config;
pub use recognition::{
    RecognitionError, RecognitionEvent, RecognitionProvider, RecognizerConfig, ResultEvent,
    ScriptedRecognizer, TranscriptSegment,
};
pub use session::{SessionController, SessionStatus};
pub use store::{SavedTranscript, StoreClient, StoreError};
pub use transcript::TranscriptAssembler;
