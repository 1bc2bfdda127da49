// In-process mock of the transcript store backend.
//
// A real axum server on an ephemeral port, so the reqwest client is
// exercised end to end. Timestamps are fixed so assertions stay
// deterministic.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const FIXED_TIMESTAMP: &str = "2024-01-01T00:00:00Z";

#[derive(Clone, Default)]
pub struct MockStore {
    records: Arc<Mutex<Vec<serde_json::Value>>>,
    requests: Arc<AtomicUsize>,
    next_id: Arc<AtomicUsize>,
}

impl MockStore {
    /// Total requests the store has seen (creates and lists)
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Seed a record directly, bypassing HTTP
    pub fn seed(&self, id: &str, text: &str) {
        self.records.lock().unwrap().push(serde_json::json!({
            "_id": id,
            "text": text,
            "timestamp": FIXED_TIMESTAMP,
        }));
    }
}

async fn create_record(
    State(store): State<MockStore>,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    store.requests.fetch_add(1, Ordering::SeqCst);

    let id = store.next_id.fetch_add(1, Ordering::SeqCst) + 1;
    let record = serde_json::json!({
        "_id": id.to_string(),
        "text": body["text"],
        "timestamp": FIXED_TIMESTAMP,
    });

    store.records.lock().unwrap().push(record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn list_records(State(store): State<MockStore>) -> Json<Vec<serde_json::Value>> {
    store.requests.fetch_add(1, Ordering::SeqCst);
    Json(store.records.lock().unwrap().clone())
}

/// Spawn the mock store, returning its base URL and a handle for assertions
pub async fn spawn_store() -> (String, MockStore) {
    let store = MockStore::default();

    let app = Router::new()
        .route("/api/transcriptions", get(list_records).post(create_record))
        .with_state(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), store)
}

/// Spawn a store whose every response is the given error status
pub async fn spawn_failing_store(status: StatusCode) -> String {
    let handler = move || async move { status };
    let app = Router::new().route("/api/transcriptions", get(handler).post(handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
