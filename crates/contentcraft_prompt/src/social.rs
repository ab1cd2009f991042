//! Social post instruction block and response schema.

use contentcraft_core::{Platform, ToneSelection};
use serde_json::{json, Value};

/// Build the per-platform instruction block for social post generation.
///
/// Enumerates, for each platform, the selected tone, the expected content
/// shape, and the formatting rules the provider must follow.
pub fn social_instructions(tones: &ToneSelection) -> String {
    format!(
        "Based on the provided content, generate social media posts for LinkedIn, Twitter, \
         Reddit, Instagram, YouTube, and a list of script ideas.\n\
         \n\
         Follow these specific instructions for each:\n\
         \n\
         1. **LinkedIn:**\n\
            * **Tone:** {linked_in}.\n\
            * **Content:** A brief summary, 1-2 key takeaways or insights, and a call to action \
         to read the full article or watch the video.\n\
            * **Formatting:** Include 3-4 relevant professional hashtags at the end.\n\
         \n\
         2. **Twitter:**\n\
            * **Tone:** {twitter}.\n\
            * **Content:** A headline-style summary or a single striking statistic.\n\
            * **Formatting:** Must be under 280 characters. Include 2-3 relevant and trending \
         hashtags. Do NOT include the original link.\n\
         \n\
         3. **Reddit:**\n\
            * **Tone:** {reddit}.\n\
            * **Content:** A neutral summary of the source, followed by an open-ended question \
         to spark conversation.\n\
            * **Formatting:** No hashtags. Provide a clear and concise title for the post.\n\
         \n\
         4. **Instagram:**\n\
            * **Tone:** {instagram}.\n\
            * **Content:** An engaging caption for an image post. Start with a hook. Use emojis \
         liberally.\n\
            * **Formatting:** Include 5-10 relevant and popular hashtags at the end, on new \
         lines.\n\
         \n\
         5. **YouTube:**\n\
            * **Tone:** {you_tube}.\n\
            * **Content:** A detailed video description. Start with a concise summary of the \
         video content. Add relevant links (placeholder links are fine).\n\
            * **Formatting:** Provide a catchy, SEO-friendly title for the video. The \
         description should include relevant keywords. Add 3-4 relevant hashtags at the end.\n\
         \n\
         6. **Script Ideas:**\n\
            * **Tone:** {script_ideas}.\n\
            * **Content:** Generate a bulleted list of 3-5 distinct and creative script ideas \
         or content angles based on the source. These should be brief concepts that could be \
         fleshed out into a full video script.\n\
            * **Formatting:** Use bullet points (e.g., '* Idea 1...').\n\
         \n\
         Return the result as a JSON object.",
        linked_in = tones.get(Platform::LinkedIn),
        twitter = tones.get(Platform::Twitter),
        reddit = tones.get(Platform::Reddit),
        instagram = tones.get(Platform::Instagram),
        you_tube = tones.get(Platform::YouTube),
        script_ideas = tones.get(Platform::ScriptIdeas),
    )
}

/// The response schema for social post generation.
///
/// All six platform keys are required; Reddit and YouTube additionally
/// require a title.
pub fn social_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "LinkedIn": {
                "type": "OBJECT",
                "properties": {
                    "content": {
                        "type": "STRING",
                        "description": "The full text content for the LinkedIn post."
                    }
                },
                "required": ["content"]
            },
            "Twitter": {
                "type": "OBJECT",
                "properties": {
                    "content": {
                        "type": "STRING",
                        "description": "The full text content for the Twitter post (tweet)."
                    }
                },
                "required": ["content"]
            },
            "Reddit": {
                "type": "OBJECT",
                "properties": {
                    "title": {
                        "type": "STRING",
                        "description": "The title for the Reddit post."
                    },
                    "content": {
                        "type": "STRING",
                        "description": "The body content for the Reddit post."
                    }
                },
                "required": ["title", "content"]
            },
            "Instagram": {
                "type": "OBJECT",
                "properties": {
                    "content": {
                        "type": "STRING",
                        "description": "The full text content for the Instagram caption."
                    }
                },
                "required": ["content"]
            },
            "YouTube": {
                "type": "OBJECT",
                "properties": {
                    "title": {
                        "type": "STRING",
                        "description": "The title for the YouTube video."
                    },
                    "content": {
                        "type": "STRING",
                        "description": "The body content for the YouTube video description."
                    }
                },
                "required": ["title", "content"]
            },
            "Script Ideas": {
                "type": "OBJECT",
                "properties": {
                    "content": {
                        "type": "STRING",
                        "description": "A bulleted list of 3-5 distinct script ideas or content angles based on the source material."
                    }
                },
                "required": ["content"]
            }
        },
        "required": ["LinkedIn", "Twitter", "Reddit", "Instagram", "YouTube", "Script Ideas"]
    })
}
