//! Content source types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// MIME-typed, base64-encoded media payload.
///
/// Transient: exists only for the duration of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInput {
    /// MIME type, e.g. "video/mp4"
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded bytes
    pub data: String,
}

/// The canonicalized input fed to the generation provider.
///
/// URL and pasted-text modes both resolve to `Text`; whether the string is
/// treated as a URL is decided at prompt-assembly time by its `http` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    /// A URL string or pasted text
    Text(String),
    /// An uploaded video as a MIME-typed byte blob
    Media(MediaInput),
}

/// The three raw input modes offered to the user.
///
/// A `SourceInput` is resolved into a [`Source`] before generation; see the
/// studio crate's source resolver.
///
/// # Examples
///
/// ```
/// use contentcraft_core::SourceInput;
///
/// assert!(SourceInput::Text("Example input text here".to_string()).is_provided());
/// assert!(!SourceInput::Url("not a url".to_string()).is_provided());
/// assert!(SourceInput::Url("https://a.com".to_string()).is_provided());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// A URL pointing at the content to analyze
    Url(String),
    /// Pasted notes, a script, or an article
    Text(String),
    /// Path to a video file on disk
    Video(PathBuf),
}

impl SourceInput {
    /// Whether the active input mode holds a usable value.
    ///
    /// URLs must parse, pasted text must be longer than five characters
    /// after trimming, and video paths must point at an existing file.
    pub fn is_provided(&self) -> bool {
        match self {
            SourceInput::Url(raw) => url::Url::parse(raw).is_ok(),
            SourceInput::Text(text) => text.trim().len() > 5,
            SourceInput::Video(path) => path.is_file(),
        }
    }
}
