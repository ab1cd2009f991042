//! Core data types for the ContentCraft content generation library.
//!
//! This crate provides the foundation data types used across all ContentCraft
//! interfaces: the platform and tone enumerations, generated post and saved
//! project records, source payloads, and the generation request type.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod input;
mod platform;
mod post;
mod project;
mod request;
mod source;
mod telemetry;
mod tone;

pub use config::ContentCraftConfig;
pub use input::Input;
pub use platform::Platform;
pub use post::{GeneratedPosts, Post};
pub use project::SavedProject;
pub use request::{GenerateRequest, GenerateRequestBuilder};
pub use source::{MediaInput, Source, SourceInput};
pub use telemetry::init_telemetry;
pub use tone::{Tone, ToneSelection};
