//! Generation pipeline, editing session, and deep links for ContentCraft.
//!
//! The studio turns a raw content source into platform-tailored posts and
//! articles through an injected generation backend, keeps the working result
//! set editable (with revertible translation overlays), and produces the
//! post-now and calendar deep links for the user-facing surface.

mod links;
mod pipeline;
mod session;
mod source;

pub use links::{calendar_link, clipboard_text, post_now, ShareAction};
pub use pipeline::{Studio, Translation};
pub use session::Session;
pub use source::resolve;
