//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against the
//! in-memory store.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use instrumented_cache::{api::create_router, AppState, HttpFetcher, MemoryStore};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

async fn create_test_app() -> Router {
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
    let state = AppState::with_store(Arc::new(MemoryStore::new()), Arc::new(fetcher), 10)
        .await
        .unwrap();
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn store_value(app: &Router, json_value: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/store")
                .header("content-type", "application/json")
                .body(Body::from(format!(r#"{{"value":{}}}"#, json_value)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    json["key"].as_str().unwrap().to_string()
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == STORE Endpoint Tests ==

#[tokio::test]
async fn test_store_returns_uuid_key() {
    let app = create_test_app().await;

    let key = store_value(&app, r#""hello""#).await;
    assert_eq!(key.len(), 36);
    assert_eq!(key.matches('-').count(), 4);
}

#[tokio::test]
async fn test_store_rejects_invalid_body() {
    let app = create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/store")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"value":{"nested":true}}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_string_value() {
    let app = create_test_app().await;
    let key = store_value(&app, r#""hello""#).await;

    let (status, json) = get(&app, &format!("/get/{}", key)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"].as_str().unwrap(), key);
    assert_eq!(json["value"].as_str().unwrap(), "hello");
}

#[tokio::test]
async fn test_get_int_value() {
    let app = create_test_app().await;
    let key = store_value(&app, "42").await;

    let (status, json) = get(&app, &format!("/get/{}?as=int", key)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"].as_i64().unwrap(), 42);
}

#[tokio::test]
async fn test_get_raw_value() {
    let app = create_test_app().await;
    let key = store_value(&app, "[104, 105]").await;

    let (status, json) = get(&app, &format!("/get/{}?as=raw", key)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["value"], serde_json::json!([104, 105]));
}

#[tokio::test]
async fn test_get_int_on_text_is_bad_request() {
    let app = create_test_app().await;
    let key = store_value(&app, r#""not a number""#).await;

    let (status, json) = get(&app, &format!("/get/{}?as=int", key)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Parse error"));
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app().await;

    let (status, json) = get(&app, "/get/nonexistent_key").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

// == CALLS Endpoint Tests ==

#[tokio::test]
async fn test_calls_tracks_store_history() {
    let app = create_test_app().await;
    let k1 = store_value(&app, r#""foo""#).await;
    let k2 = store_value(&app, "7").await;
    let k3 = store_value(&app, "2.5").await;

    let (status, json) = get(&app, "/calls/Cache.store").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"].as_i64().unwrap(), 3);

    let history = json["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0]["input"], "('foo',)");
    assert_eq!(history[0]["output"], k1.as_str());
    assert_eq!(history[1]["input"], "(7,)");
    assert_eq!(history[1]["output"], k2.as_str());
    assert_eq!(history[2]["input"], "(2.5,)");
    assert_eq!(history[2]["output"], k3.as_str());

    let replay = json["replay"].as_str().unwrap();
    assert!(replay.starts_with("Cache.store was called 3 times:"));
    assert!(replay.contains(&format!("Cache.store(*('foo',)) -> {}", k1)));
}

#[tokio::test]
async fn test_calls_unknown_operation() {
    let app = create_test_app().await;

    let (status, json) = get(&app, "/calls/Nothing.here").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"].as_i64().unwrap(), 0);
    assert!(json["history"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_retrieval_does_not_change_counter() {
    let app = create_test_app().await;
    let key = store_value(&app, r#""x""#).await;

    get(&app, &format!("/get/{}", key)).await;
    get(&app, &format!("/get/{}", key)).await;

    let (_, json) = get(&app, "/calls/Cache.store").await;
    assert_eq!(json["count"].as_i64().unwrap(), 1);
}

// == PAGE Endpoint Tests ==

#[tokio::test]
async fn test_page_count_for_unseen_url() {
    let app = create_test_app().await;

    let (status, json) = get(&app, "/page/count?url=http://never.test/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["access_count"].as_i64().unwrap(), 0);
}

#[tokio::test]
async fn test_page_zero_ttl_is_bad_request() {
    let app = create_test_app().await;

    let (status, _) = get(&app, "/page?url=http://example.com&ttl=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_page_unreachable_url_is_bad_gateway() {
    let app = create_test_app().await;

    // Port 9 on localhost is not expected to accept connections
    let (status, json) = get(&app, "/page?url=http://127.0.0.1:9/").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["error"].as_str().unwrap().contains("Network failure"));

    let (_, json) = get(&app, "/page/count?url=http://127.0.0.1:9/").await;
    assert_eq!(json["access_count"].as_i64().unwrap(), 1);
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app().await;

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
