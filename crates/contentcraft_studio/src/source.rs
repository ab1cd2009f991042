//! Source resolution.
//!
//! Turns the active input mode into the canonical request payload: a plain
//! string for URL and text modes, or a MIME-typed base64 blob for video
//! mode. Returns `Ok(None)` when no usable input exists; the caller surfaces
//! the validation message.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use contentcraft_core::{ContentCraftConfig, MediaInput, Source, SourceInput};
use contentcraft_error::{ContentCraftResult, StorageError, StorageErrorKind, StudioError,
    StudioErrorKind};
use std::path::Path;

/// MIME type for a recognized video file extension.
fn video_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "mp4" => Some("video/mp4"),
        "m4v" => Some("video/x-m4v"),
        "webm" => Some("video/webm"),
        "mov" => Some("video/quicktime"),
        "avi" => Some("video/x-msvideo"),
        "mkv" => Some("video/x-matroska"),
        "mpeg" | "mpg" => Some("video/mpeg"),
        _ => None,
    }
}

/// Resolve a raw input mode into a canonical [`Source`].
///
/// URL and text modes pass their string through unchanged. Video mode reads
/// the file's full bytes and base64-encodes them, rejecting files above the
/// configured size bound and unrecognized extensions before any encoding
/// happens.
pub async fn resolve(
    input: &SourceInput,
    config: &ContentCraftConfig,
) -> ContentCraftResult<Option<Source>> {
    match input {
        SourceInput::Url(raw) if !raw.is_empty() => Ok(Some(Source::Text(raw.clone()))),
        SourceInput::Text(text) if !text.is_empty() => Ok(Some(Source::Text(text.clone()))),
        SourceInput::Video(path) => {
            if !path.is_file() {
                return Ok(None);
            }

            let Some(mime_type) = video_mime(path) else {
                let shown = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("(none)")
                    .to_string();
                return Err(StudioError::new(StudioErrorKind::UnsupportedMedia(shown)).into());
            };

            let metadata = tokio::fs::metadata(path).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            if metadata.len() > config.max_video_bytes {
                return Err(StudioError::new(StudioErrorKind::VideoTooLarge {
                    size_bytes: metadata.len(),
                    max_bytes: config.max_video_bytes,
                })
                .into());
            }

            let bytes = tokio::fs::read(path).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;

            tracing::debug!(
                path = %path.display(),
                bytes = bytes.len(),
                mime = mime_type,
                "Encoded video source"
            );

            Ok(Some(Source::Media(MediaInput {
                mime_type: mime_type.to_string(),
                data: STANDARD.encode(bytes),
            })))
        }
        _ => Ok(None),
    }
}
