//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, GeminiError, HttpError, JsonError, StorageError, StudioError,
};

/// This is the foundation error enum. Each variant wraps the error type of
/// one concern in the workspace.
///
/// # Examples
///
/// ```
/// use contentcraft_error::{ContentCraftError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ContentCraftError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ContentCraftErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Project storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Studio orchestration error
    #[from(StudioError)]
    Studio(StudioError),
}

/// ContentCraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use contentcraft_error::{ContentCraftResult, ConfigError};
///
/// fn might_fail() -> ContentCraftResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("ContentCraft Error: {}", _0)]
pub struct ContentCraftError(Box<ContentCraftErrorKind>);

impl ContentCraftError {
    /// Create a new error from a kind.
    pub fn new(kind: ContentCraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ContentCraftErrorKind {
        &self.0
    }

    /// The message to surface to the user for this error.
    ///
    /// Studio errors carry user-facing text directly; every other concern
    /// reports through its `Display` implementation.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ContentCraftErrorKind::Studio(e) => e.kind.to_string(),
            other => other.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to ContentCraftErrorKind
impl<T> From<T> for ContentCraftError
where
    T: Into<ContentCraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for ContentCraft operations.
///
/// # Examples
///
/// ```
/// use contentcraft_error::{ContentCraftResult, HttpError};
///
/// fn fetch_data() -> ContentCraftResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type ContentCraftResult<T> = std::result::Result<T, ContentCraftError>;
