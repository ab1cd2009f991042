//! Gemini REST API data transfer objects.
//!
//! Wire shapes for `models/{model}:generateContent` (text generation) and
//! `models/{model}:predict` (Imagen image generation). Field names follow
//! the API's canonical camelCase JSON.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Inline media payload (base64 bytes with MIME type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload, e.g. "video/mp4"
    mime_type: String,
    /// Base64-encoded bytes
    data: String,
}

impl InlineData {
    /// Create an inline payload.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

/// One part of a content block: either text or inline media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text content, if this is a text part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    /// Media content, if this is an inline-data part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    /// Create a text part.
    pub fn text_part(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    /// Create an inline-media part.
    pub fn media_part(data: InlineData) -> Self {
        Self {
            text: None,
            inline_data: Some(data),
        }
    }
}

/// A content block: an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// The parts making up this block
    #[serde(default)]
    parts: Vec<Part>,
    /// Producer role in responses ("model"); omitted on requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
}

impl Content {
    /// Create a content block from parts.
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts, role: None }
    }
}

/// Generation tuning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Output token cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    /// Response MIME type, "application/json" for schema-constrained output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    /// Schema the response must conform to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

impl GenerationConfig {
    /// Plain-text generation config.
    pub fn plain(temperature: Option<f32>, max_output_tokens: Option<u32>) -> Self {
        Self {
            temperature,
            max_output_tokens,
            response_mime_type: None,
            response_schema: None,
        }
    }

    /// Schema-constrained JSON generation config.
    pub fn structured(
        temperature: Option<f32>,
        max_output_tokens: Option<u32>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            temperature,
            max_output_tokens,
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema),
        }
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The content blocks to send
    contents: Vec<Content>,
    /// Optional tuning parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a request from contents and config.
    pub fn new(contents: Vec<Content>, generation_config: Option<GenerationConfig>) -> Self {
        Self {
            contents,
            generation_config,
        }
    }
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    content: Option<Content>,
    /// Why generation stopped, e.g. "STOP"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    finish_reason: Option<String>,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates, usually exactly one
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, trimmed.
    ///
    /// Returns `None` when there is no candidate or no text part.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let mut combined = String::new();
        for part in content.parts() {
            if let Some(text) = part.text() {
                combined.push_str(text);
            }
        }
        if combined.trim().is_empty() {
            None
        } else {
            Some(combined.trim().to_string())
        }
    }
}

/// One prompt instance for the Imagen prediction endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImageInstance {
    /// Natural-language image prompt
    prompt: String,
}

impl ImageInstance {
    /// Create an instance from a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

/// Imagen prediction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ImageParameters {
    /// Number of images to generate
    sample_count: u32,
    /// Requested aspect ratio, e.g. "16:9"
    aspect_ratio: String,
}

impl ImageParameters {
    /// One image at the given aspect ratio.
    pub fn single(aspect_ratio: impl Into<String>) -> Self {
        Self {
            sample_count: 1,
            aspect_ratio: aspect_ratio.into(),
        }
    }
}

/// Request body for `models/{model}:predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    /// Prompt instances, one per requested image batch
    instances: Vec<ImageInstance>,
    /// Prediction parameters
    parameters: ImageParameters,
}

impl PredictRequest {
    /// Create a prediction request.
    pub fn new(instances: Vec<ImageInstance>, parameters: ImageParameters) -> Self {
        Self {
            instances,
            parameters,
        }
    }
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64-encoded image bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bytes_base64_encoded: Option<String>,
    /// MIME type of the encoded image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
}

/// Response body for `models/{model}:predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, Getters)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    /// Generated images; empty when the provider produced none
    #[serde(default)]
    predictions: Vec<Prediction>,
}
