//! Persistence client for the transcript store
//!
//! Thin HTTP client over the backend's append-and-list API:
//! - POST /api/transcriptions — create a record from finished text
//! - GET  /api/transcriptions — fetch all saved records
//!
//! Records are immutable from this side; their identifiers and timestamps
//! are assigned by the backend.

mod client;
mod records;

pub use client::{StoreClient, StoreError};
pub use records::{SaveRequest, SavedTranscript};
