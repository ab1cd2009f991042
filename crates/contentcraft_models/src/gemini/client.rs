//! Client for the Google Gemini REST API.
//!
//! One client serves both generation surfaces this library needs:
//! - `models/{model}:generateContent` for text, optionally constrained to a
//!   response schema (JSON mode)
//! - `models/{image_model}:predict` for illustrative images (Imagen)
//!
//! There is deliberately no retry, backoff, rate limiting, or timeout in
//! this client: every failure surfaces immediately and re-initiation is the
//! caller's decision.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use tracing::{debug, instrument, warn};

use contentcraft_core::{ContentCraftConfig, GenerateRequest};
use contentcraft_error::{ContentCraftResult, GeminiError, GeminiErrorKind};
use contentcraft_interface::{ImageGenerator, RenderedImage, TextGenerator};

use super::GeminiResult;
use super::conversion::to_generate_content_request;
use super::dto::{GenerateContentResponse, ImageInstance, ImageParameters, PredictRequest,
    PredictResponse};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Google Gemini API.
///
/// # Example
///
/// ```no_run
/// use contentcraft_models::GeminiClient;
/// use contentcraft_core::GenerateRequest;
/// use contentcraft_interface::TextGenerator;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?;
/// let request = GenerateRequest::text("Say hello");
/// let text = client.generate(&request).await?;
/// println!("{text}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
    aspect_ratio: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client with default configuration.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> ContentCraftResult<Self> {
        Self::with_config(&ContentCraftConfig::default()).map_err(Into::into)
    }

    /// Create a new Gemini client from configuration.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable and
    /// takes model names and aspect ratio from the config.
    #[instrument(name = "gemini_client_with_config", skip(config))]
    pub fn with_config(config: &ContentCraftConfig) -> ContentCraftResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key, config))
    }

    /// Create a new Gemini client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, config: &ContentCraftConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            aspect_ratio: config.aspect_ratio.clone(),
        }
    }

    /// Override the API base URL. Intended for tests and proxies.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// POST a JSON body and parse a JSON response, mapping transport and
    /// status failures into Gemini errors.
    async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> GeminiResult<R> {
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Request failed: {e}"
            ))))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        response.json().await.map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to parse response: {e}"
            )))
        })
    }

    /// Internal text generation shared by the plain and structured paths.
    async fn generate_text(
        &self,
        req: &GenerateRequest,
        schema: Option<&serde_json::Value>,
    ) -> GeminiResult<String> {
        let model = req.model.as_deref().unwrap_or(&self.text_model);
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = to_generate_content_request(req, schema);

        let response: GenerateContentResponse = self.post_json(&url, &body).await?;
        response
            .text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> ContentCraftResult<String> {
        self.generate_text(req, None).await.map_err(Into::into)
    }

    #[instrument(skip(self, req, schema))]
    async fn generate_structured(
        &self,
        req: &GenerateRequest,
        schema: &serde_json::Value,
    ) -> ContentCraftResult<serde_json::Value> {
        let text = self.generate_text(req, Some(schema)).await?;
        serde_json::from_str(&text).map_err(|e| {
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Response was not valid JSON: {e}"
            )))
            .into()
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.text_model
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(prompt_chars = prompt.chars().count()))]
    async fn render(&self, prompt: &str) -> ContentCraftResult<Option<RenderedImage>> {
        let image_prompt = format!(
            "A visually appealing and relevant image for a social media post about: \
             \"{prompt}\". Minimalist, clean, professional style."
        );

        let url = format!("{}/models/{}:predict", self.base_url, self.image_model);
        let body = PredictRequest::new(
            vec![ImageInstance::new(image_prompt)],
            ImageParameters::single(self.aspect_ratio.clone()),
        );

        let response: PredictResponse = self.post_json(&url, &body).await?;

        let Some(prediction) = response.predictions().first() else {
            warn!("Image provider returned no predictions");
            return Ok(None);
        };

        match prediction.bytes_base64_encoded() {
            Some(data) => Ok(Some(RenderedImage {
                mime_type: prediction
                    .mime_type()
                    .clone()
                    .unwrap_or_else(|| "image/png".to_string()),
                data: data.clone(),
            })),
            None => {
                warn!("Image prediction carried no encoded bytes");
                Ok(None)
            }
        }
    }

    fn aspect_ratio(&self) -> &str {
        &self.aspect_ratio
    }
}
