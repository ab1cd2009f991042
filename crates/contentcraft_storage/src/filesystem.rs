//! Filesystem-based project repository.

use crate::ProjectRepository;
use contentcraft_core::SavedProject;
use contentcraft_error::{ContentCraftResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Filesystem repository backend.
///
/// Stores the whole project list as one JSON document. Writes go through a
/// temp file and rename so a crash mid-write cannot leave a half-written
/// list behind.
pub struct FileSystemProjects {
    path: PathBuf,
}

impl FileSystemProjects {
    /// Create a repository backed by the given file path.
    ///
    /// The file and its parent directories are created lazily on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The conventional per-user location for the project file.
    ///
    /// Returns `None` when the platform exposes no data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("contentcraft").join("projects.json"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ProjectRepository for FileSystemProjects {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> ContentCraftResult<Vec<SavedProject>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No project file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
                .into());
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(projects) => Ok(projects),
            Err(e) => {
                // Best-effort cache: discard the corrupt record instead of
                // failing startup.
                tracing::warn!(error = %e, "Discarding corrupt project file");
                let _ = tokio::fs::remove_file(&self.path).await;
                Ok(Vec::new())
            }
        }
    }

    #[tracing::instrument(skip(self, projects), fields(path = %self.path.display(), count = projects.len()))]
    async fn save(&self, projects: &[SavedProject]) -> ContentCraftResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let bytes = serde_json::to_vec(projects).map_err(|e| {
            StorageError::new(StorageErrorKind::Serialize(e.to_string()))
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &self.path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        tracing::debug!("Project list written");
        Ok(())
    }
}
