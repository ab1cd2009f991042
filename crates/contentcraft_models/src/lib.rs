//! Generation provider integrations for ContentCraft.
//!
//! Currently one provider is implemented: the Google Gemini REST API, used
//! for text generation (plain and schema-constrained) and for illustrative
//! images through the Imagen prediction endpoint.

pub mod gemini;

pub use gemini::GeminiClient;
