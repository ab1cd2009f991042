//! The generation-and-merge pipeline.
//!
//! One generation request moves through the phases
//! `requesting-text → validating → requesting-images → merged`; any text or
//! validation failure abandons the whole operation with a single generic
//! message, while per-image failures degrade to "no picture" for that one
//! platform. Nothing is retried; every failure requires explicit
//! re-initiation.

use futures::future;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use contentcraft_core::{
    ContentCraftConfig, GenerateRequest, GeneratedPosts, Input, Platform, Post, Source,
    SourceInput, ToneSelection,
};
use contentcraft_error::{ContentCraftResult, StudioError, StudioErrorKind};
use contentcraft_interface::{ImageGenerator, TextGenerator};
use contentcraft_prompt::{
    article_instructions, image_prompt, plain_translation_prompt, social_instructions,
    social_response_schema, source_inputs, titled_translation_prompt,
    translation_response_schema, truncate_image_prompt,
};

use crate::source::resolve;

/// A translated rendition of one post.
///
/// Held as an overlay over the editable post so that reverting restores the
/// original without re-fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated title, present iff the source post had one
    pub title: Option<String>,
    /// Translated body text
    pub content: String,
}

/// The two-field shape requested for titled translations.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedFields {
    translated_title: String,
    translated_content: String,
}

/// The response shape for social generation: all six platform keys are
/// required, with a title wherever the platform requires one. A missing key
/// fails deserialization and surfaces as the generic generation failure.
#[derive(Debug, Deserialize)]
struct PlatformDrafts {
    #[serde(rename = "LinkedIn")]
    linked_in: Draft,
    #[serde(rename = "Twitter")]
    twitter: Draft,
    #[serde(rename = "Reddit")]
    reddit: TitledDraft,
    #[serde(rename = "Instagram")]
    instagram: Draft,
    #[serde(rename = "YouTube")]
    you_tube: TitledDraft,
    #[serde(rename = "Script Ideas")]
    script_ideas: Draft,
}

#[derive(Debug, Deserialize)]
struct Draft {
    content: String,
}

#[derive(Debug, Deserialize)]
struct TitledDraft {
    title: String,
    content: String,
}

impl PlatformDrafts {
    fn into_posts(self) -> GeneratedPosts {
        GeneratedPosts {
            linked_in: Post::new(self.linked_in.content),
            twitter: Post::new(self.twitter.content),
            reddit: Post::titled(self.reddit.title, self.reddit.content),
            instagram: Some(Post::new(self.instagram.content)),
            you_tube: Some(Post::titled(self.you_tube.title, self.you_tube.content)),
            script_ideas: Some(Post::new(self.script_ideas.content)),
        }
    }
}

/// The generation orchestrator.
///
/// Owns nothing but its injected backends and configuration; the working
/// result set lives in the caller's [`crate::Session`].
pub struct Studio {
    text: Arc<dyn TextGenerator>,
    image: Arc<dyn ImageGenerator>,
    config: ContentCraftConfig,
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("provider", &self.text.provider_name())
            .field("text_model", &self.config.text_model)
            .finish_non_exhaustive()
    }
}

impl Studio {
    /// Create a studio over the given backends.
    pub fn new(
        text: Arc<dyn TextGenerator>,
        image: Arc<dyn ImageGenerator>,
        config: ContentCraftConfig,
    ) -> Self {
        Self {
            text,
            image,
            config,
        }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &ContentCraftConfig {
        &self.config
    }

    /// Generate social posts for all six platforms from a raw input mode.
    ///
    /// Validates and resolves the input first: an unusable value yields the
    /// missing-source validation error and no provider request is issued.
    #[instrument(skip(self, input, tones))]
    pub async fn generate_posts(
        &self,
        input: &SourceInput,
        tones: &ToneSelection,
    ) -> ContentCraftResult<GeneratedPosts> {
        let source = self.resolve_source(input).await?;
        self.generate_posts_from_source(&source, tones).await
    }

    /// Generate social posts from an already-resolved source.
    #[instrument(skip(self, source, tones))]
    pub async fn generate_posts_from_source(
        &self,
        source: &Source,
        tones: &ToneSelection,
    ) -> ContentCraftResult<GeneratedPosts> {
        debug!(phase = "requesting-text");
        let instructions = social_instructions(tones);
        let request = GenerateRequest {
            inputs: source_inputs(source, &instructions),
            temperature: Some(self.config.posts_temperature),
            max_tokens: None,
            model: Some(self.config.text_model.clone()),
        };

        let schema = social_response_schema();
        let payload = match self.text.generate_structured(&request, &schema).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Text generation failed");
                return Err(StudioError::new(StudioErrorKind::Generation).into());
            }
        };

        debug!(phase = "validating");
        let drafts: PlatformDrafts = match serde_json::from_value(payload) {
            Ok(drafts) => drafts,
            Err(e) => {
                warn!(error = %e, "Generated JSON is missing required platform data");
                return Err(StudioError::new(StudioErrorKind::Generation).into());
            }
        };
        let mut posts = drafts.into_posts();

        debug!(phase = "requesting-images");
        let renders: Vec<_> = posts
            .iter()
            .map(|(platform, post)| {
                let prompt = truncate_image_prompt(&image_prompt(platform, post));
                let image = Arc::clone(&self.image);
                async move {
                    match image.render(&prompt).await {
                        Ok(rendered) => (platform, rendered.map(|r| r.to_data_url())),
                        Err(e) => {
                            warn!(
                                platform = %platform,
                                error = %e,
                                "Image generation failed, continuing without image"
                            );
                            (platform, None)
                        }
                    }
                }
            })
            .collect();

        for (platform, image_url) in future::join_all(renders).await {
            if let Some(post) = posts.get_mut(platform) {
                post.image_url = image_url;
            }
        }

        debug!(phase = "merged");
        Ok(posts)
    }

    /// Generate a long-form article from a raw input mode.
    #[instrument(skip(self, input))]
    pub async fn generate_article(
        &self,
        input: &SourceInput,
        word_count: u32,
    ) -> ContentCraftResult<String> {
        let source = self.resolve_source(input).await?;
        self.generate_article_from_source(&source, word_count).await
    }

    /// Generate a long-form article from an already-resolved source.
    #[instrument(skip(self, source))]
    pub async fn generate_article_from_source(
        &self,
        source: &Source,
        word_count: u32,
    ) -> ContentCraftResult<String> {
        let instructions = article_instructions(word_count);
        let request = GenerateRequest {
            inputs: source_inputs(source, &instructions),
            temperature: Some(self.config.article_temperature),
            max_tokens: None,
            model: Some(self.config.text_model.clone()),
        };

        match self.text.generate(&request).await {
            Ok(article) => Ok(article.trim().to_string()),
            Err(e) => {
                warn!(error = %e, "Article generation failed");
                Err(StudioError::new(StudioErrorKind::Article).into())
            }
        }
    }

    /// Regenerate the illustrative image for one post.
    ///
    /// Returns `Ok(None)` when the provider produced nothing; provider
    /// errors propagate and are scoped to this platform by the caller.
    #[instrument(skip(self, post))]
    pub async fn regenerate_image(
        &self,
        platform: Platform,
        post: &Post,
    ) -> ContentCraftResult<Option<String>> {
        let prompt = truncate_image_prompt(&image_prompt(platform, post));
        let rendered = self.image.render(&prompt).await?;
        Ok(rendered.map(|r| r.to_data_url()))
    }

    /// Translate one post into the target language.
    ///
    /// Title-bearing posts request a structured two-field translation; the
    /// rest translate the body as plain text. Failures surface as a
    /// platform-scoped message and leave the rest of the session untouched.
    #[instrument(skip(self, post))]
    pub async fn translate_post(
        &self,
        post: &Post,
        language: &str,
    ) -> ContentCraftResult<Translation> {
        match self.translate_inner(post, language).await {
            Ok(translation) => Ok(translation),
            Err(e) => {
                warn!(error = %e, language, "Translation failed");
                Err(StudioError::new(StudioErrorKind::Translation {
                    language: language.to_string(),
                })
                .into())
            }
        }
    }

    async fn translate_inner(
        &self,
        post: &Post,
        language: &str,
    ) -> ContentCraftResult<Translation> {
        let model = Some(self.config.text_model.clone());

        if let Some(title) = &post.title {
            let request = GenerateRequest {
                inputs: vec![Input::Text(titled_translation_prompt(
                    &post.content,
                    title,
                    language,
                ))],
                temperature: None,
                max_tokens: None,
                model,
            };
            let payload = self
                .text
                .generate_structured(&request, &translation_response_schema())
                .await?;
            let fields: TranslatedFields = serde_json::from_value(payload).map_err(|e| {
                contentcraft_error::JsonError::new(format!("Invalid translation payload: {e}"))
            })?;
            Ok(Translation {
                title: Some(fields.translated_title),
                content: fields.translated_content,
            })
        } else {
            let request = GenerateRequest {
                inputs: vec![Input::Text(plain_translation_prompt(&post.content, language))],
                temperature: None,
                max_tokens: None,
                model,
            };
            let content = self.text.generate(&request).await?;
            Ok(Translation {
                title: None,
                content,
            })
        }
    }

    /// Validate and resolve an input mode, mapping unusable input to the
    /// missing-source validation error before any provider call.
    async fn resolve_source(&self, input: &SourceInput) -> ContentCraftResult<Source> {
        if !input.is_provided() {
            return Err(StudioError::new(StudioErrorKind::MissingSource).into());
        }
        match resolve(input, &self.config).await? {
            Some(source) => Ok(source),
            None => Err(StudioError::new(StudioErrorKind::MissingSource).into()),
        }
    }
}
