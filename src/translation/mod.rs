//! Prompt-to-image batch translation.
//!
//! This is the core contract of the service: an ordered list of text prompts
//! goes in, an ordered list of image data URIs comes out. Each prompt is
//! enriched with a fixed instruction template and submitted to the generation
//! capability one at a time. A failed generation never aborts the batch; it
//! records an empty string in that prompt's slot and moves on.

use crate::error::Result;
use async_trait::async_trait;
use base64::Engine;
use tracing::warn;

/// Fixed instruction template wrapped around every caller prompt before it is
/// submitted upstream.
const PROMPT_TEMPLATE: &str =
    "A high quality, creative, and vibrant image representing the following concept: ";

/// Binary image output of a generation call.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// The narrow seam to the external image-generation capability.
///
/// Production uses [`crate::gemini::GeminiClient`]; tests substitute a stub
/// without touching the batch-translation logic.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage>;
}

/// Wrap a raw caller prompt in the fixed instruction template.
pub fn enrich_prompt(prompt: &str) -> String {
    format!("{PROMPT_TEMPLATE}{prompt}")
}

/// Format a generated image as a `data:<mime>;base64,<payload>` URI.
pub fn to_data_uri(image: &GeneratedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.mime_type,
        base64::engine::general_purpose::STANDARD.encode(&image.bytes)
    )
}

/// Generate a single image, returning a data URI on success or the empty
/// string on any generation failure.
pub async fn generate_image_from_prompt(generator: &dyn ImageGenerator, prompt: &str) -> String {
    let enriched = enrich_prompt(prompt);
    match generator.generate(&enriched).await {
        Ok(image) => to_data_uri(&image),
        Err(e) => {
            warn!("Image generation failed for prompt {:?}: {}", prompt, e);
            String::new()
        }
    }
}

/// Generate one image per prompt, strictly in order, one at a time.
///
/// The output always has the same length and order as the input. Per-prompt
/// failures are recorded as empty strings; the batch itself always runs to
/// completion.
pub async fn generate_images_from_prompts(
    generator: &dyn ImageGenerator,
    prompts: &[String],
) -> Vec<String> {
    let mut image_data_uris = Vec::with_capacity(prompts.len());
    for prompt in prompts {
        image_data_uris.push(generate_image_from_prompt(generator, prompt).await);
    }
    image_data_uris
}
