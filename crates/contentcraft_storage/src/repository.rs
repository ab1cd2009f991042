//! Repository trait definition.

use contentcraft_core::SavedProject;
use contentcraft_error::ContentCraftResult;

/// Trait for pluggable saved-project backends.
///
/// The project list is read and written as a whole; there are no partial
/// updates and no stored-schema migrations. Implementations are injected
/// into the session rather than touched as ambient global state.
#[async_trait::async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Load the full project list.
    ///
    /// A missing or corrupt backing record yields an empty list, never a
    /// startup failure.
    async fn load(&self) -> ContentCraftResult<Vec<SavedProject>>;

    /// Persist the full project list, replacing whatever was stored.
    async fn save(&self, projects: &[SavedProject]) -> ContentCraftResult<()>;
}
