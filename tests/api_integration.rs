//! Integration tests for the HTTP API

use voiceguard::config::AppConfig;
use voiceguard::core::create_router;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use serde_json::Value;

fn create_test_router(record_dir: Option<&std::path::Path>) -> Router {
    let config = AppConfig {
        record_dir: record_dir.map(|p| p.to_string_lossy().into_owned()),
        ..AppConfig::default()
    };
    create_router(&config)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_router(None);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["records_stored"], 0);
}

#[tokio::test]
async fn test_analyze_text() {
    let app = create_test_router(None);

    let response = app
        .oneshot(post_json(
            "/analyze/text",
            r#"{"text": "In conclusion, moreover, furthermore, the methodology was utilized."}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["classification"], "deepfake");
    assert_eq!(json["indicators"].as_array().unwrap().len(), 8);
    let score = json["score"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&score));
    assert!(json["signals"]["aiPatternCount"].as_u64().unwrap() >= 3);
}

#[tokio::test]
async fn test_analyze_empty_text_is_bad_request() {
    let app = create_test_router(None);

    let response = app
        .oneshot(post_json("/analyze/text", r#"{"text": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_detect_unknown_media_type() {
    let app = create_test_router(None);

    let response = app
        .oneshot(post_json("/detect", r#"{"content": "abc", "mediaType": "hologram"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_detect_image_shape() {
    let app = create_test_router(None);

    let response = app
        .oneshot(post_json("/detect", r#"{"content": "base64-image", "mediaType": "image"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let kind = json["type"].as_str().unwrap();
    assert!(kind == "authentic" || kind == "deepfake");
    assert_eq!(json["indicators"].as_array().unwrap().len(), 5);
    assert_eq!(json["metadata"]["processingSteps"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_detect_records_and_lists() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_router(Some(dir.path()));

    let response = app
        .clone()
        .oneshot(post_json(
            "/detect",
            r#"{"content": "I can't wait for the weekend, we're gonna hike!!", "mediaType": "text", "userId": "u-7"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/records").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let records = body_json(response).await;
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["user_id"], "u-7");
    assert_eq!(records[0]["detection_method"], "heuristic-text");

    let id = records[0]["id"].as_str().unwrap();
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/records/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let record = body_json(response).await;
    assert_eq!(record["id"], id);
}

#[tokio::test]
async fn test_record_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_test_router(Some(dir.path()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/records/rec_doesnotexist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_detect_missing_field_is_json_bad_request() {
    let app = create_test_router(None);

    let response = app
        .oneshot(post_json("/detect", r#"{"content": "abc"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("mediaType"));
}

#[tokio::test]
async fn test_analyze_malformed_body_is_json_bad_request() {
    let app = create_test_router(None);

    let response = app
        .oneshot(post_json("/analyze/text", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("invalid request"));
}

#[tokio::test]
async fn test_stray_json_file_does_not_break_listing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.json"), r#"{"hello": 1}"#).unwrap();
    let app = create_test_router(Some(dir.path()));

    let response = app
        .clone()
        .oneshot(post_json("/detect", r#"{"content": "holiday photo", "mediaType": "image"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/records").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let records = body_json(response).await;
    assert_eq!(records.as_array().unwrap().len(), 1);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let health = body_json(response).await;
    assert_eq!(health["records_stored"], 1);
}
