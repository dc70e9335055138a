// HTTP request handlers

use super::routes::AppState;
use crate::error::AppError;
use crate::translation;
use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub image_data_uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImagesResponse {
    pub image_data_uris: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub timestamp: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.config.gemini.model.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for POST /generate-image-from-prompt.
///
/// Requires a non-empty `prompt` field. A generation failure is still a 200
/// with an empty `imageDataUri`; only a malformed request is rejected.
pub async fn generate_image_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<GenerateImageResponse>, AppError> {
    // Decode by hand so malformed bodies map to the documented 400 payload
    // instead of an extractor rejection.
    let prompt = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|value| value.get("prompt").and_then(Value::as_str).map(str::to_owned))
        .filter(|prompt| !prompt.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Prompt is required".to_string()))?;

    info!("Received single-prompt generation request");

    let image_data_uri =
        translation::generate_image_from_prompt(state.generator.as_ref(), &prompt).await;

    Ok(Json(GenerateImageResponse { image_data_uri }))
}

/// Handler for POST /generate-images-from-prompts.
///
/// Requires a `prompts` field holding a list of strings. An empty list is
/// valid and yields an empty result list. Individual generation failures
/// surface as empty strings in the corresponding slots, never as an HTTP
/// error.
pub async fn generate_images_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<GenerateImagesResponse>, AppError> {
    let prompts = parse_prompts(&body)
        .ok_or_else(|| AppError::InvalidRequest("A list of prompts is required".to_string()))?;

    info!("Received batch generation request: prompts={}", prompts.len());

    let image_data_uris =
        translation::generate_images_from_prompts(state.generator.as_ref(), &prompts).await;

    Ok(Json(GenerateImagesResponse { image_data_uris }))
}

fn parse_prompts(body: &str) -> Option<Vec<String>> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    let items = value.get("prompts")?.as_array()?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_owned))
        .collect()
}
