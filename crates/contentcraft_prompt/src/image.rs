//! Per-platform image prompt selection.

use contentcraft_core::{Platform, Post};

/// Maximum characters forwarded to the image provider.
pub const MAX_IMAGE_PROMPT_CHARS: usize = 250;

/// Fixed prompt for the script-ideas card, which has no single post body to
/// illustrate.
const SCRIPT_IDEAS_PROMPT: &str = "A minimalist and professional image representing creative \
     brainstorming, scriptwriting, or new ideas. Abstract, clean design.";

/// Build the illustrative image prompt for one platform.
///
/// Title-bearing platforms use `"title: body"`; the script-ideas card uses a
/// fixed brainstorming prompt. Callers truncate the result with
/// [`truncate_image_prompt`] before sending.
pub fn image_prompt(platform: Platform, post: &Post) -> String {
    match platform {
        Platform::ScriptIdeas => SCRIPT_IDEAS_PROMPT.to_string(),
        _ if platform.requires_title() => format!(
            "{}: {}",
            post.title.as_deref().unwrap_or_default(),
            post.content
        ),
        _ => post.content.clone(),
    }
}

/// Truncate a prompt to [`MAX_IMAGE_PROMPT_CHARS`] characters.
pub fn truncate_image_prompt(prompt: &str) -> String {
    prompt.chars().take(MAX_IMAGE_PROMPT_CHARS).collect()
}
