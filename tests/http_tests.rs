// HTTP adapter tests

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use prompt2image::config::AppConfig;
use prompt2image::error::{AppError, Result};
use prompt2image::server::create_router;
use prompt2image::translation::{GeneratedImage, ImageGenerator};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct ScriptedGenerator {
    outcomes: Mutex<VecDeque<Result<GeneratedImage>>>,
}

impl ScriptedGenerator {
    fn new(outcomes: Vec<Result<GeneratedImage>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
        }
    }
}

#[async_trait]
impl ImageGenerator for ScriptedGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage> {
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected generation call")
    }
}

fn png() -> Result<GeneratedImage> {
    Ok(GeneratedImage {
        bytes: b"fake-png".to_vec(),
        mime_type: "image/png".to_string(),
    })
}

fn failure() -> Result<GeneratedImage> {
    Err(AppError::GeminiApi("generation failed".to_string()))
}

fn test_router(outcomes: Vec<Result<GeneratedImage>>) -> Router {
    create_router(
        AppConfig::default(),
        Arc::new(ScriptedGenerator::new(outcomes)),
    )
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_missing_prompt_is_rejected() {
    let (status, body) = post_json(test_router(vec![]), "/generate-image-from-prompt", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Prompt is required");
}

#[tokio::test]
async fn test_empty_prompt_is_rejected() {
    let (status, body) = post_json(
        test_router(vec![]),
        "/generate-image-from-prompt",
        r#"{"prompt": ""}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Prompt is required");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let (status, body) = post_json(
        test_router(vec![]),
        "/generate-image-from-prompt",
        "not json",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_single_prompt_success() {
    let (status, body) = post_json(
        test_router(vec![png()]),
        "/generate-image-from-prompt",
        r#"{"prompt": "a cat"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let uri = body["imageDataUri"].as_str().unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_single_prompt_generation_failure_is_still_200() {
    let (status, body) = post_json(
        test_router(vec![failure()]),
        "/generate-image-from-prompt",
        r#"{"prompt": "a cat"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imageDataUri"], "");
}

#[tokio::test]
async fn test_prompts_must_be_a_list() {
    let (status, body) = post_json(
        test_router(vec![]),
        "/generate-images-from-prompts",
        r#"{"prompts": "not-a-list"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A list of prompts is required");
}

#[tokio::test]
async fn test_missing_prompts_field_is_rejected() {
    let (status, body) =
        post_json(test_router(vec![]), "/generate-images-from-prompts", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "A list of prompts is required");
}

#[tokio::test]
async fn test_batch_with_partial_failure() {
    let (status, body) = post_json(
        test_router(vec![png(), failure()]),
        "/generate-images-from-prompts",
        r#"{"prompts": ["a cat", "a dog"]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let uris = body["imageDataUris"].as_array().unwrap();
    assert_eq!(uris.len(), 2);
    assert!(uris[0].as_str().unwrap().starts_with("data:image/png;base64,"));
    assert_eq!(uris[1], "");
}

#[tokio::test]
async fn test_empty_prompts_list_yields_empty_result() {
    let (status, body) = post_json(
        test_router(vec![]),
        "/generate-images-from-prompts",
        r#"{"prompts": []}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imageDataUris"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_router(vec![])
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
}
