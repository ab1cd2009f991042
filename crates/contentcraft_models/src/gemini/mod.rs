//! Google Gemini API implementation.

mod client;
pub mod conversion;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageInstance, ImageParameters, InlineData, Part, PredictRequest, PredictResponse, Prediction,
};

use contentcraft_error::GeminiError;

/// Result type scoped to Gemini-specific errors.
pub type GeminiResult<T> = std::result::Result<T, GeminiError>;
