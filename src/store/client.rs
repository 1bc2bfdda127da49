use super::records::{SaveRequest, SavedTranscript};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error talking to the transcript store: {0}")]
    Network(#[from] reqwest::Error),

    #[error("transcript store returned HTTP {status}")]
    Server { status: u16 },
}

/// HTTP client for the transcript store
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Create a client for the store at `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        info!("Transcript store at {}", base_url);

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/transcriptions", self.base_url)
    }

    /// Persist a finished transcript
    ///
    /// The caller guards against empty text; the store assigns the record's
    /// id and timestamp.
    pub async fn save(&self, text: &str) -> Result<SavedTranscript, StoreError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&SaveRequest {
                text: text.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Server {
                status: status.as_u16(),
            });
        }

        let record: SavedTranscript = response.json().await?;
        info!(id = %record.id, "Saved transcript ({} chars)", record.text.len());
        Ok(record)
    }

    /// Fetch all saved transcripts
    pub async fn list(&self) -> Result<Vec<SavedTranscript>, StoreError> {
        let response = self.http.get(self.endpoint()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Server {
                status: status.as_u16(),
            });
        }

        let records: Vec<SavedTranscript> = response.json().await?;
        info!("Fetched {} saved transcripts", records.len());
        Ok(records)
    }
}
