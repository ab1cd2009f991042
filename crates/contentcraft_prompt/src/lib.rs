//! Prompt construction and response schemas for ContentCraft.
//!
//! Converts a per-platform tone selection into the natural-language
//! instruction block sent to the generation provider, together with the
//! machine-checkable response schemas the provider is asked to honor.

mod article;
mod image;
mod preamble;
mod social;
mod translate;

pub use article::article_instructions;
pub use image::{image_prompt, truncate_image_prompt, MAX_IMAGE_PROMPT_CHARS};
pub use preamble::source_inputs;
pub use social::{social_instructions, social_response_schema};
pub use translate::{
    plain_translation_prompt, titled_translation_prompt, translation_response_schema,
};
