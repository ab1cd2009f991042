//! Conversion from core request types to Gemini wire types.

use crate::gemini::{Content, GenerateContentRequest, GenerationConfig, InlineData, Part};
use contentcraft_core::{GenerateRequest, Input};

/// Convert a core request into a `generateContent` request body.
///
/// When a schema is supplied the request asks for JSON output constrained
/// to it; otherwise plain text is requested.
pub fn to_generate_content_request(
    req: &GenerateRequest,
    schema: Option<&serde_json::Value>,
) -> GenerateContentRequest {
    let parts = req
        .inputs
        .iter()
        .map(|input| match input {
            Input::Text(text) => Part::text_part(text.clone()),
            Input::Media(media) => {
                Part::media_part(InlineData::new(media.mime_type.clone(), media.data.clone()))
            }
        })
        .collect();

    let config = match schema {
        Some(schema) => GenerationConfig::structured(req.temperature, req.max_tokens, schema.clone()),
        None => GenerationConfig::plain(req.temperature, req.max_tokens),
    };

    GenerateContentRequest::new(vec![Content::new(parts)], Some(config))
}
