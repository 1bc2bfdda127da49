//! Dictation session control
//!
//! This module provides the `SessionController` abstraction that manages:
//! - Start/stop of the recognition provider, with support and
//!   already-listening guards
//! - Folding result events into the displayed transcript
//! - Saving finished transcripts and the in-memory saved list
//! - A single status message reflecting the last significant event

mod controller;
mod status;

pub use controller::SessionController;
pub use status::SessionStatus;
