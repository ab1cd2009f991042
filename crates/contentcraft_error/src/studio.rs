//! Studio orchestration error types.
//!
//! These kinds carry the user-facing messages for the generation pipeline.
//! Provider detail stays in [`crate::GeminiError`]; the studio maps it into
//! this taxonomy at the operation boundary.

/// Studio error conditions.
///
/// The `Display` text of each kind is the message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StudioErrorKind {
    /// No usable source for the active input mode
    #[display("Please provide a source (URL, video, or text).")]
    MissingSource,
    /// Uploaded video exceeds the configured size bound
    #[display("The video file is too large ({} bytes, limit {} bytes).", size_bytes, max_bytes)]
    VideoTooLarge {
        /// Actual file size
        size_bytes: u64,
        /// Configured limit
        max_bytes: u64,
    },
    /// File extension is not a recognized video format
    #[display("Unsupported video format: {}", _0)]
    UnsupportedMedia(String),
    /// Text generation or response validation failed
    #[display(
        "Failed to generate content. The AI may be unable to access the source or returned an unexpected format. Please try a different source."
    )]
    Generation,
    /// Article generation failed
    #[display(
        "Failed to generate the article. Please try a different source or adjust the word count."
    )]
    Article,
    /// Translation failed for one platform
    #[display("Failed to translate text to {}.", language)]
    Translation {
        /// Requested target language
        language: String,
    },
    /// Save requested with no generated content in the session
    #[display("There is no content to save.")]
    NothingToSave,
}

/// Studio error with source location tracking.
///
/// # Examples
///
/// ```
/// use contentcraft_error::{StudioError, StudioErrorKind};
///
/// let err = StudioError::new(StudioErrorKind::MissingSource);
/// assert!(format!("{}", err).contains("provide a source"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Studio Error: {} at line {} in {}", kind, line, file)]
pub struct StudioError {
    /// The kind of error that occurred
    pub kind: StudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StudioError {
    /// Create a new studio error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
