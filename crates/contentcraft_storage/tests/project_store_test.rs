//! Tests for the filesystem project repository and store.

use contentcraft_core::{GeneratedPosts, Post};
use contentcraft_storage::{FileSystemProjects, ProjectRepository, ProjectStore};
use tempfile::TempDir;

fn sample_posts() -> GeneratedPosts {
    GeneratedPosts {
        linked_in: Post::new("linkedin body"),
        twitter: Post::new("tweet body"),
        reddit: Post::titled("reddit title", "reddit body"),
        instagram: Some(Post::new("insta body")),
        you_tube: Some(Post::titled("yt title", "yt body")),
        script_ideas: Some(Post::new("* idea one")),
    }
}

fn repo_in(dir: &TempDir) -> FileSystemProjects {
    FileSystemProjects::new(dir.path().join("projects.json"))
}

#[tokio::test]
async fn load_without_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();
    assert!(store.projects().is_empty());
}

#[tokio::test]
async fn posts_only_project_roundtrips() {
    let dir = TempDir::new().unwrap();

    let mut store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();
    let saved = store
        .save_snapshot("posts only", Some(sample_posts()), None)
        .await
        .unwrap();

    // Reopen from disk and check the snapshot survived intact.
    let store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();
    let loaded = store.find(saved.id).unwrap();
    assert_eq!(loaded.posts.as_ref().unwrap(), &sample_posts());
    assert!(loaded.article.is_none());
}

#[tokio::test]
async fn article_only_project_roundtrips() {
    let dir = TempDir::new().unwrap();

    let mut store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();
    let saved = store
        .save_snapshot("article only", None, Some("Title\n\nBody.".to_string()))
        .await
        .unwrap();

    let store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();
    let loaded = store.find(saved.id).unwrap();
    assert!(loaded.posts.is_none());
    assert_eq!(loaded.article.as_deref(), Some("Title\n\nBody."));
}

#[tokio::test]
async fn delete_removes_exactly_one_and_keeps_order() {
    let dir = TempDir::new().unwrap();
    let mut store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();

    let first = store.save_snapshot("first", None, Some("a".into())).await.unwrap();
    let second = store.save_snapshot("second", None, Some("b".into())).await.unwrap();
    let third = store.save_snapshot("third", None, Some("c".into())).await.unwrap();

    assert!(store.delete(second.id).await.unwrap());

    let names: Vec<&str> = store.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["first", "third"]);

    // The deletion is durable.
    let store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();
    assert!(store.find(first.id).is_some());
    assert!(store.find(second.id).is_none());
    assert!(store.find(third.id).is_some());
}

#[tokio::test]
async fn delete_of_unknown_id_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let mut store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();
    store.save_snapshot("only", None, Some("a".into())).await.unwrap();

    assert!(!store.delete(42).await.unwrap());
    assert_eq!(store.projects().len(), 1);
}

#[tokio::test]
async fn rapid_saves_get_distinct_ids() {
    let dir = TempDir::new().unwrap();
    let mut store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();

    let a = store.save_snapshot("a", None, Some("a".into())).await.unwrap();
    let b = store.save_snapshot("b", None, Some("b".into())).await.unwrap();
    let c = store.save_snapshot("c", None, Some("c".into())).await.unwrap();
    assert!(a.id < b.id && b.id < c.id);
}

#[tokio::test]
async fn corrupt_file_is_discarded_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("projects.json");
    tokio::fs::write(&path, b"{ not json").await.unwrap();

    let repo = FileSystemProjects::new(&path);
    let projects = repo.load().await.unwrap();
    assert!(projects.is_empty());
    // The corrupt record is gone; the next load starts clean.
    assert!(!path.exists());
}

#[tokio::test]
async fn save_replaces_previous_contents_wholesale() {
    let dir = TempDir::new().unwrap();
    let repo = repo_in(&dir);

    let mut store = ProjectStore::open(Box::new(repo_in(&dir))).await.unwrap();
    store.save_snapshot("kept", None, Some("a".into())).await.unwrap();

    let loaded = repo.load().await.unwrap();
    assert_eq!(loaded.len(), 1);

    repo.save(&[]).await.unwrap();
    assert!(repo.load().await.unwrap().is_empty());
}
