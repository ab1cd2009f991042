//! Translation prompts and response schema.

use serde_json::{json, Value};

/// Prompt for translating a titled post.
///
/// Pairs with [`translation_response_schema`]: the provider is asked for a
/// JSON object carrying both translated fields.
pub fn titled_translation_prompt(text: &str, title: &str, language: &str) -> String {
    format!(
        "Translate the following title and content into {language}. Return a JSON object with \
         two keys: \"translatedTitle\" and \"translatedContent\".\n\
         \n\
         Title: \"{title}\"\n\
         \n\
         Content: \"{text}\""
    )
}

/// Prompt for translating body text with no title.
pub fn plain_translation_prompt(text: &str, language: &str) -> String {
    format!("Translate the following text into {language}: \"{text}\"")
}

/// The response schema for titled translations.
pub fn translation_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "translatedTitle": { "type": "STRING" },
            "translatedContent": { "type": "STRING" }
        },
        "required": ["translatedTitle", "translatedContent"]
    })
}
