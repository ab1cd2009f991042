//! Saved-project persistence for ContentCraft.
//!
//! This crate provides the project store: a best-effort local cache of
//! named generation snapshots. A single JSON document holds the whole
//! project list; it is read once at startup and rewritten wholesale on
//! every save and delete. Corrupt stored data is discarded rather than
//! failing startup.
//!
//! # Example
//!
//! ```no_run
//! use contentcraft_storage::{FileSystemProjects, ProjectStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = FileSystemProjects::new("/tmp/contentcraft/projects.json");
//! let mut store = ProjectStore::open(Box::new(repository)).await?;
//!
//! let project = store
//!     .save_snapshot("Launch week", None, Some("Title\n\nBody.".to_string()))
//!     .await?;
//! assert!(store.find(project.id).is_some());
//! # Ok(())
//! # }
//! ```

mod filesystem;
mod repository;
mod store;

pub use filesystem::FileSystemProjects;
pub use repository::ProjectRepository;
pub use store::ProjectStore;
