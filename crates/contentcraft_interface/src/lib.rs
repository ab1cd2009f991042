//! Backend trait definitions for ContentCraft.
//!
//! This crate defines the seams between the orchestration pipeline and the
//! generation provider: [`TextGenerator`] for plain and schema-constrained
//! text, and [`ImageGenerator`] for one-shot illustrative images.

mod traits;
mod types;

pub use traits::{ImageGenerator, TextGenerator};
pub use types::RenderedImage;
