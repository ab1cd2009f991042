//! Writing tone types.

use crate::Platform;
use serde::{Deserialize, Serialize};

/// A writing-style directive applied per platform during generation.
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
pub enum Tone {
    /// Polished business voice
    Professional,
    /// Relaxed conversational voice
    Casual,
    /// Data-driven, measured voice
    Analytical,
    /// Clever and sharp
    Witty,
    /// Played for laughs
    Humorous,
    /// Uplifting and motivating
    Inspirational,
    /// Expert, confident voice
    Authoritative,
    /// Imaginative and unconventional
    Creative,
}

/// One selected [`Tone`] per platform, mutable before generation.
///
/// # Examples
///
/// ```
/// use contentcraft_core::{Platform, Tone, ToneSelection};
///
/// let mut tones = ToneSelection::default();
/// assert_eq!(tones.get(Platform::Twitter), Tone::Witty);
///
/// tones.set(Platform::Twitter, Tone::Analytical);
/// assert_eq!(tones.get(Platform::Twitter), Tone::Analytical);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToneSelection {
    /// Tone for LinkedIn posts
    #[serde(rename = "LinkedIn")]
    pub linked_in: Tone,
    /// Tone for tweets
    #[serde(rename = "Twitter")]
    pub twitter: Tone,
    /// Tone for Reddit submissions
    #[serde(rename = "Reddit")]
    pub reddit: Tone,
    /// Tone for Instagram captions
    #[serde(rename = "Instagram")]
    pub instagram: Tone,
    /// Tone for YouTube descriptions
    #[serde(rename = "YouTube")]
    pub you_tube: Tone,
    /// Tone for script ideas
    #[serde(rename = "Script Ideas")]
    pub script_ideas: Tone,
}

impl Default for ToneSelection {
    fn default() -> Self {
        Self {
            linked_in: Tone::Professional,
            twitter: Tone::Witty,
            reddit: Tone::Casual,
            instagram: Tone::Inspirational,
            you_tube: Tone::Authoritative,
            script_ideas: Tone::Creative,
        }
    }
}

impl ToneSelection {
    /// Get the tone selected for a platform.
    pub fn get(&self, platform: Platform) -> Tone {
        match platform {
            Platform::LinkedIn => self.linked_in,
            Platform::Twitter => self.twitter,
            Platform::Reddit => self.reddit,
            Platform::Instagram => self.instagram,
            Platform::YouTube => self.you_tube,
            Platform::ScriptIdeas => self.script_ideas,
        }
    }

    /// Replace the tone selected for a platform.
    pub fn set(&mut self, platform: Platform, tone: Tone) {
        match platform {
            Platform::LinkedIn => self.linked_in = tone,
            Platform::Twitter => self.twitter = tone,
            Platform::Reddit => self.reddit = tone,
            Platform::Instagram => self.instagram = tone,
            Platform::YouTube => self.you_tube = tone,
            Platform::ScriptIdeas => self.script_ideas = tone,
        }
    }
}
