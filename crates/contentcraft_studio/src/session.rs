//! The working result set.
//!
//! A session owns the editable posts and article between generation and an
//! explicit save. It is lost on teardown unless snapshotted into the
//! project store.

use crate::pipeline::Translation;
use contentcraft_core::{GeneratedPosts, Platform, Post, SavedProject};
use contentcraft_error::{ContentCraftResult, StudioError, StudioErrorKind};
use contentcraft_storage::ProjectStore;
use std::collections::HashMap;

/// The editable working state for one user session.
///
/// Holds the generated posts, the user's edits on top of them, the
/// generated article, and per-platform translation overlays that can be
/// reverted without re-fetching.
#[derive(Debug, Default)]
pub struct Session {
    generated_posts: Option<GeneratedPosts>,
    editable_posts: Option<GeneratedPosts>,
    article: Option<String>,
    translations: HashMap<Platform, Translation>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly generated result set, replacing edits and overlays.
    pub fn set_posts(&mut self, posts: GeneratedPosts) {
        self.generated_posts = Some(posts.clone());
        self.editable_posts = Some(posts);
        self.translations.clear();
    }

    /// Install a freshly generated article.
    pub fn set_article(&mut self, article: String) {
        self.article = Some(article);
    }

    /// The editable posts, if any generation has happened.
    pub fn posts(&self) -> Option<&GeneratedPosts> {
        self.editable_posts.as_ref()
    }

    /// The post as originally generated, before any edits.
    pub fn original_post(&self, platform: Platform) -> Option<&Post> {
        self.generated_posts.as_ref()?.get(platform)
    }

    /// The generated article, if any.
    pub fn article(&self) -> Option<&str> {
        self.article.as_deref()
    }

    /// Whether anything has been generated in this session.
    pub fn has_content(&self) -> bool {
        self.editable_posts.is_some() || self.article.is_some()
    }

    /// Replace one editable post. Editing clears the platform's
    /// translation overlay so the edit is visible immediately.
    pub fn edit_post(&mut self, platform: Platform, post: Post) {
        if let Some(posts) = self.editable_posts.as_mut() {
            posts.insert(platform, post);
            self.translations.remove(&platform);
        }
    }

    /// Apply a regenerated or uploaded image to one post.
    ///
    /// An absent image leaves the current one in place, mirroring the
    /// degrade-gracefully policy of the batch fan-out.
    pub fn apply_image(&mut self, platform: Platform, image_url: Option<String>) -> bool {
        let Some(url) = image_url else {
            return false;
        };
        match self
            .editable_posts
            .as_mut()
            .and_then(|posts| posts.get_mut(platform))
        {
            Some(post) => {
                post.image_url = Some(url);
                true
            }
            None => false,
        }
    }

    /// Overlay a translation on one platform.
    pub fn apply_translation(&mut self, platform: Platform, translation: Translation) {
        self.translations.insert(platform, translation);
    }

    /// The active translation overlay for a platform, if any.
    pub fn translation(&self, platform: Platform) -> Option<&Translation> {
        self.translations.get(&platform)
    }

    /// Drop the translation overlay, restoring the original rendition.
    ///
    /// Returns whether an overlay was present. No request is issued.
    pub fn revert_translation(&mut self, platform: Platform) -> bool {
        self.translations.remove(&platform).is_some()
    }

    /// The post as currently displayed: the translation overlay when one is
    /// active (falling back to the editable title when the translation has
    /// none), otherwise the editable post. The image is never translated.
    pub fn display_post(&self, platform: Platform) -> Option<Post> {
        let editable = self.editable_posts.as_ref()?.get(platform)?;
        match self.translations.get(&platform) {
            Some(translation) => Some(Post {
                title: translation.title.clone().or_else(|| editable.title.clone()),
                content: translation.content.clone(),
                image_url: editable.image_url.clone(),
            }),
            None => Some(editable.clone()),
        }
    }

    /// The displayed post composed for the clipboard.
    pub fn clipboard_text(&self, platform: Platform) -> Option<String> {
        let post = self.display_post(platform)?;
        Some(crate::links::clipboard_text(platform, &post))
    }

    /// Snapshot the session into the project store under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`StudioErrorKind::NothingToSave`] when neither posts nor an
    /// article have been generated.
    pub async fn save_project(
        &self,
        name: impl Into<String>,
        store: &mut ProjectStore,
    ) -> ContentCraftResult<SavedProject> {
        if !self.has_content() {
            return Err(StudioError::new(StudioErrorKind::NothingToSave).into());
        }
        store
            .save_snapshot(name, self.editable_posts.clone(), self.article.clone())
            .await
    }

    /// Restore a saved project into the session, clearing edits and
    /// overlays.
    pub fn load_project(&mut self, project: &SavedProject) {
        self.generated_posts = project.posts.clone();
        self.editable_posts = project.posts.clone();
        self.article = project.article.clone();
        self.translations.clear();
    }
}
