// Gemini API client

use super::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::config::GeminiConfig;
use crate::error::{AppError, Result};
use crate::translation::{GeneratedImage, ImageGenerator};
use crate::utils::logging::sanitize;
use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for the Gemini generative language API.
///
/// Speaks the public `generateContent` endpoint with the `IMAGE` response
/// modality and authenticates with a static API key. There is deliberately
/// no retry or backoff here: a failed generation is terminal for that
/// prompt, and the batch layer above decides what to do with it.
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// Fails before any network activity if the API key is absent, so a
    /// misconfigured process never reaches the upstream API.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(AppError::Config(
                "Gemini API key is not set (GOOGLE_API_KEY)".to_string(),
            ));
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls()
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// The configured image generation model.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            }),
        };

        debug!("Requesting image generation with model {}", self.config.model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            let error_msg =
                Self::extract_error_message(&response_text).unwrap_or(response_text);
            return Err(AppError::GeminiApi(format!(
                "HTTP {}: {}",
                status.as_u16(),
                sanitize(&error_msg)
            )));
        }

        serde_json::from_str(&response_text)
            .map_err(|e| AppError::GeminiApi(format!("Invalid response: {}", e)))
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(response_text)
            .ok()?
            .get("error")?
            .get("message")?
            .as_str()
            .map(String::from)
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage> {
        let response = self.generate_content(prompt).await?;

        if let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            return Err(AppError::GeminiApi(format!("Prompt blocked: {}", reason)));
        }

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::GeminiApi("No candidates in response".to_string()))?;

        let parts = candidate.content.map(|content| content.parts).unwrap_or_default();
        for part in parts {
            if let Part::InlineData { inline_data } = part {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(&inline_data.data)
                    .map_err(|e| AppError::GeminiApi(format!("Invalid image payload: {}", e)))?;
                return Ok(GeneratedImage {
                    bytes,
                    mime_type: inline_data.mime_type,
                });
            }
        }

        Err(AppError::GeminiApi(
            "No image data in response".to_string(),
        ))
    }
}
