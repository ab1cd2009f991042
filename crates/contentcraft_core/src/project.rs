//! Saved project records.

use crate::GeneratedPosts;
use serde::{Deserialize, Serialize};

/// A named, persisted snapshot of generated posts and/or an article.
///
/// Created on explicit save; immutable once saved except via delete.
/// The id is the creation time in epoch milliseconds, which also provides
/// uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProject {
    /// Creation timestamp in epoch milliseconds, doubles as the unique id
    pub id: i64,
    /// User-supplied project name
    pub name: String,
    /// Snapshot of the editable posts, if any were generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<GeneratedPosts>,
    /// Generated article text, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,
}
