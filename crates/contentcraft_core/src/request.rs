//! Request types for generation.

use crate::Input;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Generic generation request (multimodal-safe).
///
/// Every request in this system is single-turn, so the request carries its
/// input parts directly rather than a conversation history.
///
/// # Examples
///
/// ```
/// use contentcraft_core::{GenerateRequest, Input};
///
/// let request = GenerateRequest::builder()
///     .inputs(vec![Input::Text("Hello!".to_string())])
///     .temperature(Some(0.7))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.inputs.len(), 1);
/// assert_eq!(request.temperature, Some(0.7));
/// assert_eq!(request.model, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Builder)]
pub struct GenerateRequest {
    /// The input parts to send
    pub inputs: Vec<Input>,
    /// Sampling temperature (0.0 to 1.0)
    #[builder(default)]
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    pub max_tokens: Option<u32>,
    /// Model identifier to use, `None` for the client default
    #[builder(default)]
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Convenience constructor for a single-text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            inputs: vec![Input::Text(prompt.into())],
            temperature: None,
            max_tokens: None,
            model: None,
        }
    }
}
