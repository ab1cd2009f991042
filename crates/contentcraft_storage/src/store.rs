//! Session-facing project store.

use crate::ProjectRepository;
use chrono::Utc;
use contentcraft_core::{GeneratedPosts, SavedProject};
use contentcraft_error::ContentCraftResult;

/// Owner of the persisted project list.
///
/// Loads the list once at startup, appends snapshots on save, removes by
/// id on delete, and rewrites the whole list through its repository after
/// every mutation.
pub struct ProjectStore {
    repository: Box<dyn ProjectRepository>,
    projects: Vec<SavedProject>,
}

impl std::fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects.len())
            .finish_non_exhaustive()
    }
}

impl ProjectStore {
    /// Open the store, loading the list from the repository.
    pub async fn open(repository: Box<dyn ProjectRepository>) -> ContentCraftResult<Self> {
        let projects = repository.load().await?;
        tracing::debug!(count = projects.len(), "Loaded saved projects");
        Ok(Self {
            repository,
            projects,
        })
    }

    /// The saved projects in insertion order.
    pub fn projects(&self) -> &[SavedProject] {
        &self.projects
    }

    /// Find a saved project by id.
    pub fn find(&self, id: i64) -> Option<&SavedProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Append a new snapshot and persist the full list.
    ///
    /// The id is the creation time in epoch milliseconds; rapid saves in the
    /// same millisecond are bumped to keep ids unique.
    pub async fn save_snapshot(
        &mut self,
        name: impl Into<String>,
        posts: Option<GeneratedPosts>,
        article: Option<String>,
    ) -> ContentCraftResult<SavedProject> {
        let now = Utc::now().timestamp_millis();
        let id = self
            .projects
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(now, |max| now.max(max + 1));

        let project = SavedProject {
            id,
            name: name.into(),
            posts,
            article,
        };

        self.projects.push(project.clone());
        self.repository.save(&self.projects).await?;
        tracing::info!(id, name = %project.name, "Saved project");
        Ok(project)
    }

    /// Remove a project by id and persist the full list.
    ///
    /// Returns whether a project was removed. The order of the remaining
    /// projects is unchanged.
    pub async fn delete(&mut self, id: i64) -> ContentCraftResult<bool> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Ok(false);
        }

        self.repository.save(&self.projects).await?;
        tracing::info!(id, "Deleted project");
        Ok(true)
    }
}
