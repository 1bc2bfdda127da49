//! Recognition session adapter
//!
//! This module wraps a continuous speech-recognition capability behind the
//! `RecognitionProvider` trait:
//! - Start/stop lifecycle for a capture session
//! - Push-based delivery of incremental result events over a channel
//! - A scripted provider replaying synthetic event sequences

mod provider;
mod scripted;

pub use provider::{
    RecognitionError, RecognitionEvent, RecognitionProvider, RecognizerConfig, ResultEvent,
    TranscriptSegment,
};
pub use scripted::ScriptedRecognizer;
