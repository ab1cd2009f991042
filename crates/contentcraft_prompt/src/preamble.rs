//! Source preamble assembly.

use contentcraft_core::{Input, Source};

/// Combine a canonical source with an instruction block into request inputs.
///
/// URL-shaped strings are introduced as a URL to analyze, other strings as
/// inline text, and media sources become an inline media part followed by
/// the instruction text.
pub fn source_inputs(source: &Source, instructions: &str) -> Vec<Input> {
    match source {
        Source::Text(text) if text.starts_with("http") => vec![Input::Text(format!(
            "Analyze the content from the following URL: {text}\n\n{instructions}"
        ))],
        Source::Text(text) => vec![Input::Text(format!(
            "Analyze the following text content:\n\n{text}\n\n{instructions}"
        ))],
        Source::Media(media) => vec![
            Input::Media(media.clone()),
            Input::Text(format!(
                "Analyze the content of this video.\n\n{instructions}"
            )),
        ],
    }
}
