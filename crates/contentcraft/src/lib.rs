//! ContentCraft - content generation for social platforms
//!
//! ContentCraft turns a content source (a URL, a video file, or pasted
//! text) into platform-tailored social media posts and long-form articles
//! through a generative backend, then lets the caller edit, translate,
//! illustrate, and persist the results locally.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use contentcraft::{
//!     ContentCraftConfig, GeminiClient, SourceInput, Studio, ToneSelection,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ContentCraftConfig::load()?;
//!     let gemini = Arc::new(GeminiClient::with_config(&config)?);
//!     let studio = Studio::new(gemini.clone(), gemini, config);
//!
//!     let posts = studio
//!         .generate_posts(
//!             &SourceInput::Url("https://example.com/article".to_string()),
//!             &ToneSelection::default(),
//!         )
//!         .await?;
//!     println!("Tweet: {}", posts.twitter.content);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ContentCraft is organized as a workspace with focused crates:
//!
//! - `contentcraft_core` - Core data types (Platform, Post, Source, etc.)
//! - `contentcraft_interface` - TextGenerator and ImageGenerator traits
//! - `contentcraft_error` - Error types
//! - `contentcraft_prompt` - Instruction blocks and response schemas
//! - `contentcraft_models` - Generation provider implementations
//! - `contentcraft_storage` - Saved-project persistence
//! - `contentcraft_studio` - Pipeline, session, and deep links
//!
//! This crate (`contentcraft`) re-exports everything for convenience.

pub use contentcraft_core::{
    init_telemetry, ContentCraftConfig, GenerateRequest, GenerateRequestBuilder, GeneratedPosts,
    Input, MediaInput, Platform, Post, SavedProject, Source, SourceInput, Tone, ToneSelection,
};
pub use contentcraft_error::{
    BuilderError, BuilderErrorKind, ConfigError, ContentCraftError, ContentCraftErrorKind,
    ContentCraftResult, GeminiError, GeminiErrorKind, HttpError, JsonError, StorageError,
    StorageErrorKind, StudioError, StudioErrorKind,
};
pub use contentcraft_interface::{ImageGenerator, RenderedImage, TextGenerator};
pub use contentcraft_models::GeminiClient;
pub use contentcraft_prompt::{
    article_instructions, image_prompt, social_instructions, social_response_schema,
    source_inputs, truncate_image_prompt,
};
pub use contentcraft_storage::{FileSystemProjects, ProjectRepository, ProjectStore};
pub use contentcraft_studio::{
    calendar_link, clipboard_text, post_now, resolve, Session, ShareAction, Studio, Translation,
};
