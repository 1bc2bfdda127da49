// Integration tests for the transcript store client against an in-process
// mock backend.

mod common;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use voicenotes::{StoreClient, StoreError};

#[tokio::test]
async fn save_returns_the_created_record() {
    let (base_url, _store) = common::spawn_store().await;
    let client = StoreClient::new(base_url);

    let record = client.save("hello").await.unwrap();

    assert_eq!(record.id, "1");
    assert_eq!(record.text, "hello");
    assert_eq!(
        record.timestamp,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn list_returns_records_in_insertion_order() {
    let (base_url, store) = common::spawn_store().await;
    let client = StoreClient::new(base_url);

    client.save("first").await.unwrap();
    client.save("second").await.unwrap();

    let records = client.list().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text, "first");
    assert_eq!(records[1].text, "second");
    assert_eq!(store.record_count(), 2);
}

#[tokio::test]
async fn list_of_empty_store_is_empty() {
    let (base_url, _store) = common::spawn_store().await;
    let client = StoreClient::new(base_url);

    let records = client.list().await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn non_success_response_maps_to_server_error() {
    let base_url = common::spawn_failing_store(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = StoreClient::new(base_url);

    match client.save("hello").await {
        Err(StoreError::Server { status }) => assert_eq!(status, 500),
        other => panic!("expected server error, got {:?}", other.map(|r| r.text)),
    }

    match client.list().await {
        Err(StoreError::Server { status }) => assert_eq!(status, 500),
        other => panic!("expected server error, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn unreachable_store_maps_to_network_error() {
    // Discard port: nothing listens there.
    let client = StoreClient::new("http://127.0.0.1:9");

    assert!(matches!(
        client.save("hello").await,
        Err(StoreError::Network(_))
    ));
    assert!(matches!(client.list().await, Err(StoreError::Network(_))));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_tolerated() {
    let (base_url, _store) = common::spawn_store().await;
    let client = StoreClient::new(format!("{}/", base_url));

    let record = client.save("hello").await.unwrap();
    assert_eq!(record.text, "hello");
}
