//! Trait definitions for generation backends.

use crate::RenderedImage;
use async_trait::async_trait;
use contentcraft_core::GenerateRequest;
use contentcraft_error::ContentCraftResult;

/// Core trait for text generation backends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate plain text for a request.
    async fn generate(&self, req: &GenerateRequest) -> ContentCraftResult<String>;

    /// Generate output conforming to a JSON schema.
    ///
    /// The returned value is the parsed JSON payload; callers deserialize it
    /// into their own shapes and treat any missing field as a validation
    /// failure.
    async fn generate_structured(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> ContentCraftResult<serde_json::Value>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier used when a request does not specify one.
    fn model_name(&self) -> &str;
}

/// Trait for illustrative image generation backends.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Render one image for a short natural-language prompt.
    ///
    /// Returns `Ok(None)` when the provider produces no image; that outcome
    /// degrades to "no picture" rather than failing a batch. Transport and
    /// API errors are returned as `Err` and are the caller's to scope.
    async fn render(&self, prompt: &str) -> ContentCraftResult<Option<RenderedImage>>;

    /// Aspect ratio requested for every render.
    fn aspect_ratio(&self) -> &str {
        "16:9"
    }
}
