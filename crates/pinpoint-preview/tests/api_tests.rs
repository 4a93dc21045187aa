//! Integration tests for the preview HTTP endpoints.
//!
//! Tests drive the Axum `Router` directly via `tower::ServiceExt` without
//! starting a TCP server.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use pinpoint_core::{MapSettings, seed_catalog};
use pinpoint_preview::{AppState, build_router};
use serde_json::Value;
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    Arc::new(AppState::new(seed_catalog(), MapSettings::default()).unwrap())
}

async fn get(uri: &str) -> (StatusCode, String, axum::body::Bytes) {
    let router = build_router(make_test_state());
    let response = router
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_owned())
        .unwrap_or_default();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, bytes)
}

async fn get_json(uri: &str) -> Value {
    let (status, _, bytes) = get(uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

fn event_ids(json: &Value) -> Vec<u64> {
    json["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_u64().unwrap())
        .collect()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html_page() {
    let (status, content_type, bytes) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.contains("text/html"));

    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Showing 5 events"));
    assert!(html.contains("leaflet.js"));
}

#[tokio::test]
async fn test_widget_fragment_reflects_filters() {
    let (status, content_type, bytes) = get("/widget?filters=free").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.contains("text/html"));

    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Showing 3 events"));
    assert!(html.contains("pinpoint-chip pinpoint-chip-active"));
    assert_eq!(html.matches("L.marker(").count(), 3);
    assert!(html.contains("Sunset Hike"));
    assert!(!html.contains("Open Mic Night"));
}

#[tokio::test]
async fn test_events_without_filters() {
    let json = get_json("/api/events").await;
    assert_eq!(json["count"], 5);
    assert_eq!(event_ids(&json), vec![1, 2, 3, 4, 5]);
    assert_eq!(json["filters"], serde_json::json!([]));
}

#[tokio::test]
async fn test_events_free_is_price_based() {
    let json = get_json("/api/events?filters=free").await;
    assert_eq!(json["count"], 3);
    assert_eq!(event_ids(&json), vec![1, 3, 4]);
}

#[tokio::test]
async fn test_events_indoor_tag() {
    let json = get_json("/api/events?filters=indoor").await;
    assert_eq!(event_ids(&json), vec![2, 5]);
}

#[tokio::test]
async fn test_events_conjunctive_filters() {
    let json = get_json("/api/events?filters=outdoors,free").await;
    assert_eq!(json["count"], 3);
    assert_eq!(event_ids(&json), vec![1, 3, 4]);
    assert_eq!(json["filters"], serde_json::json!(["free", "outdoors"]));
}

#[tokio::test]
async fn test_events_music_tag() {
    let json = get_json("/api/events?filters=music").await;
    assert_eq!(event_ids(&json), vec![2]);
}

#[tokio::test]
async fn test_events_unknown_key_matches_nothing() {
    let json = get_json("/api/events?filters=karaoke").await;
    assert_eq!(json["count"], 0);
    assert!(json["events"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_events_trims_segments() {
    let json = get_json("/api/events?filters=%20indoor,,").await;
    assert_eq!(event_ids(&json), vec![2, 5]);
}

#[tokio::test]
async fn test_events_keys_are_case_sensitive() {
    let json = get_json("/api/events?filters=Outdoors").await;
    assert_eq!(json["count"], 0);
    let json = get_json("/api/events?filters=FREE").await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["filters"], serde_json::json!(["FREE"]));
}

#[tokio::test]
async fn test_list_filters() {
    let json = get_json("/api/filters").await;
    let keys: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["free", "outdoors", "indoor"]);
    assert_eq!(json[2]["label"], "Indoors");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _, _) = get("/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
