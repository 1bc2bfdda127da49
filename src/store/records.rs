use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted transcript record, owned by the backend store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedTranscript {
    /// Store-assigned unique identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// The saved transcript text
    pub text: String,

    /// Creation time, assigned by the store
    pub timestamp: DateTime<Utc>,
}

/// Body of a create request
#[derive(Debug, Serialize, Deserialize)]
pub struct SaveRequest {
    pub text: String,
}
