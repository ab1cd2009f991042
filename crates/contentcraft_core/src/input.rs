//! Input types for generation requests.

use crate::MediaInput;
use serde::{Deserialize, Serialize};

/// One part of a generation request.
///
/// # Examples
///
/// ```
/// use contentcraft_core::{Input, MediaInput};
///
/// let text = Input::Text("Analyze this.".to_string());
/// let media = Input::Media(MediaInput {
///     mime_type: "video/mp4".to_string(),
///     data: "AAAA".to_string(),
/// });
/// assert_ne!(text, media);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input
    Text(String),
    /// Inline media input (base64 payload with MIME type)
    Media(MediaInput),
}
