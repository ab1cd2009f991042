//! Platform enumeration.

use serde::{Deserialize, Serialize};

/// The six supported destinations for generated content.
///
/// The serialized names match the keys used in the generation response
/// schema and in persisted projects, including the spaced `"Script Ideas"`
/// key.
///
/// # Examples
///
/// ```
/// use contentcraft_core::Platform;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(Platform::iter().count(), 6);
/// assert_eq!(format!("{}", Platform::ScriptIdeas), "Script Ideas");
/// assert!(Platform::Reddit.requires_title());
/// assert!(!Platform::Twitter.requires_title());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Platform {
    /// LinkedIn feed post
    LinkedIn,
    /// Twitter post (tweet)
    Twitter,
    /// Reddit submission (title + body)
    Reddit,
    /// Instagram caption
    Instagram,
    /// YouTube video title + description
    YouTube,
    /// Bulleted script ideas for video content
    #[serde(rename = "Script Ideas")]
    #[display("Script Ideas")]
    ScriptIdeas,
}

impl Platform {
    /// Whether posts for this platform carry a required title.
    pub fn requires_title(&self) -> bool {
        matches!(self, Platform::Reddit | Platform::YouTube)
    }
}
