//! Shared backend types.

use serde::{Deserialize, Serialize};

/// One generated image, still base64-encoded as received from the provider.
///
/// # Examples
///
/// ```
/// use contentcraft_interface::RenderedImage;
///
/// let image = RenderedImage {
///     mime_type: "image/png".to_string(),
///     data: "iVBORw0KGgo".to_string(),
/// };
/// assert_eq!(image.to_data_url(), "data:image/png;base64,iVBORw0KGgo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedImage {
    /// MIME type of the encoded image
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl RenderedImage {
    /// Encode as a `data:` URL suitable for a [`contentcraft_core::Post`]
    /// image field.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}
