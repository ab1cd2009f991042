//! TOML-based configuration.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from contentcraft.toml)
//! - User overrides (~/.config/contentcraft/contentcraft.toml, then
//!   ./contentcraft.toml) with later sources taking precedence

use config::{Config, File, FileFormat};
use contentcraft_error::{ConfigError, ContentCraftResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../contentcraft.toml");

/// Runtime configuration for generation and persistence.
///
/// # Examples
///
/// ```
/// use contentcraft_core::ContentCraftConfig;
///
/// let config = ContentCraftConfig::default();
/// assert_eq!(config.text_model, "gemini-2.5-flash");
/// assert_eq!(config.aspect_ratio, "16:9");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCraftConfig {
    /// Model used for post, article, and translation generation
    pub text_model: String,
    /// Model used for illustrative images
    pub image_model: String,
    /// Sampling temperature for social post generation
    pub posts_temperature: f32,
    /// Sampling temperature for article generation
    pub article_temperature: f32,
    /// Aspect ratio requested for generated images
    pub aspect_ratio: String,
    /// Uploaded videos larger than this are rejected before encoding
    pub max_video_bytes: u64,
    /// Word count used for articles when the caller does not specify one
    pub default_word_count: u32,
    /// Override for the saved-project file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_path: Option<PathBuf>,
}

impl Default for ContentCraftConfig {
    fn default() -> Self {
        Self {
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "imagen-4.0-generate-001".to_string(),
            posts_temperature: 0.7,
            article_temperature: 0.6,
            aspect_ratio: "16:9".to_string(),
            max_video_bytes: 100 * 1024 * 1024,
            default_word_count: 500,
            projects_path: None,
        }
    }
}

impl ContentCraftConfig {
    /// Load configuration, merging bundled defaults with user overrides.
    ///
    /// Sources are merged in order: bundled defaults, the user config
    /// directory, then the working directory, with later values winning.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an override file exists but cannot be
    /// parsed, or if the merged values fail to deserialize.
    pub fn load() -> ContentCraftResult<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("contentcraft").join("contentcraft.toml");
            builder = builder.add_source(File::from(user_path).required(false));
        }

        builder = builder.add_source(File::new("contentcraft.toml", FileFormat::Toml).required(false));

        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {e}")).into())
    }
}
