//! Article instruction block.

/// Build the instruction block for long-form article generation.
///
/// Requests a plain-text document of approximately `word_count` words with
/// the first line reserved for the title and no markup anywhere.
pub fn article_instructions(word_count: u32) -> String {
    format!(
        "Based on the provided content, write a comprehensive and well-structured article of \
         approximately {word_count} words.\n\
         The article should have a clear title, an engaging introduction, several body \
         paragraphs that explore the topic in depth, and a concluding summary.\n\
         Format the output as plain text. Do not use Markdown. The first line must be the \
         article title."
    )
}
