//! Generated post types.

use crate::Platform;
use serde::{Deserialize, Serialize};

/// One generated social media post.
///
/// `content` is always present once generated; `title` is present iff the
/// platform requires it. `image_url` holds a `data:` URL or a remote URL.
///
/// # Examples
///
/// ```
/// use contentcraft_core::Post;
///
/// let post = Post::new("Check out our new release!");
/// assert!(post.title.is_none());
/// assert!(post.image_url.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post title, required for Reddit and YouTube
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Post body text
    pub content: String,
    /// Illustrative image as a data URL or remote URL
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Post {
    /// Create an untitled post with no image.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: None,
            content: content.into(),
            image_url: None,
        }
    }

    /// Create a titled post with no image.
    pub fn titled(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: content.into(),
            image_url: None,
        }
    }
}

/// Mapping from [`Platform`] to [`Post`].
///
/// LinkedIn, Twitter, and Reddit are mandatory; the remaining platforms are
/// optional in the type but populated by every successful generation. The
/// serialized keys match the platform names, including `"Script Ideas"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPosts {
    /// LinkedIn post
    #[serde(rename = "LinkedIn")]
    pub linked_in: Post,
    /// Twitter post
    #[serde(rename = "Twitter")]
    pub twitter: Post,
    /// Reddit post
    #[serde(rename = "Reddit")]
    pub reddit: Post,
    /// Instagram caption
    #[serde(rename = "Instagram", default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<Post>,
    /// YouTube title + description
    #[serde(rename = "YouTube", default, skip_serializing_if = "Option::is_none")]
    pub you_tube: Option<Post>,
    /// Script ideas
    #[serde(
        rename = "Script Ideas",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub script_ideas: Option<Post>,
}

impl GeneratedPosts {
    /// Get the post for a platform, if present.
    pub fn get(&self, platform: Platform) -> Option<&Post> {
        match platform {
            Platform::LinkedIn => Some(&self.linked_in),
            Platform::Twitter => Some(&self.twitter),
            Platform::Reddit => Some(&self.reddit),
            Platform::Instagram => self.instagram.as_ref(),
            Platform::YouTube => self.you_tube.as_ref(),
            Platform::ScriptIdeas => self.script_ideas.as_ref(),
        }
    }

    /// Get a mutable reference to the post for a platform, if present.
    pub fn get_mut(&mut self, platform: Platform) -> Option<&mut Post> {
        match platform {
            Platform::LinkedIn => Some(&mut self.linked_in),
            Platform::Twitter => Some(&mut self.twitter),
            Platform::Reddit => Some(&mut self.reddit),
            Platform::Instagram => self.instagram.as_mut(),
            Platform::YouTube => self.you_tube.as_mut(),
            Platform::ScriptIdeas => self.script_ideas.as_mut(),
        }
    }

    /// Replace the post for a platform.
    pub fn insert(&mut self, platform: Platform, post: Post) {
        match platform {
            Platform::LinkedIn => self.linked_in = post,
            Platform::Twitter => self.twitter = post,
            Platform::Reddit => self.reddit = post,
            Platform::Instagram => self.instagram = Some(post),
            Platform::YouTube => self.you_tube = Some(post),
            Platform::ScriptIdeas => self.script_ideas = Some(post),
        }
    }

    /// Iterate the populated posts in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &Post)> {
        use strum::IntoEnumIterator;
        Platform::iter().filter_map(|p| self.get(p).map(|post| (p, post)))
    }

    /// Number of populated posts.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no posts are populated. Always false: the mandatory
    /// platforms are present by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}
