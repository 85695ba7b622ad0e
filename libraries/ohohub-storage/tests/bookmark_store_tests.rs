//! Integration tests for the bookmark store
//!
//! Exercises the store through both backends and checks the list invariants
//! with generated add/remove sequences.

use chrono::{DateTime, Duration, Utc};
use ohohub_core::{Gender, Post, PostId, Theme};
use ohohub_storage::{
    BookmarkStore, FileBackend, KeyValueBackend, MemoryBackend, ThemeStore, BOOKMARK_STORAGE_KEY,
};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

// ===== Test Helpers =====

fn create_post(id: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: format!("Title {id}"),
        x_id: Some("voice_actor".to_string()),
        gender: Gender::Male,
        allow_promotion: true,
        created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        audio_url: format!("https://cdn.example.com/{id}.mp3"),
        tags: None,
    }
}

fn base_time() -> DateTime<Utc> {
    "2024-06-01T00:00:00Z".parse().unwrap()
}

// ===== File Backend =====

#[test]
fn bookmarks_survive_reopening_the_backend() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = BookmarkStore::new(FileBackend::open(dir.path()).unwrap());
        store.add(&create_post("first"));
        store.add(&create_post("second"));
    }

    let reopened = BookmarkStore::new(FileBackend::open(dir.path()).unwrap());
    let ids: Vec<_> = reopened.list().into_iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![PostId::new("second"), PostId::new("first")]);
}

#[test]
fn corrupt_file_degrades_to_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("ohohub-bookmarks.json"), "[{\"id\":").unwrap();

    let store = BookmarkStore::new(FileBackend::open(dir.path()).unwrap());
    assert!(store.list().is_empty());
    assert!(!store.contains("anything"));
}

#[test]
fn stored_json_is_newest_first_array() {
    let backend = MemoryBackend::new();
    let store = BookmarkStore::new(&backend);

    store.add_at(&create_post("a"), base_time());
    store.add_at(&create_post("b"), base_time() + Duration::minutes(1));

    let raw = backend.get(BOOKMARK_STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = json.as_array().unwrap();

    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["id"], "b");
    assert_eq!(array[0]["xId"], "voice_actor");
    assert_eq!(array[1]["id"], "a");
    assert_eq!(array[1]["bookmarkedAt"], "2024-06-01T00:00:00Z");
}

// ===== Shared Namespace =====

#[test]
fn stores_share_one_namespace() {
    let backend = Arc::new(MemoryBackend::new());
    let detail_view = BookmarkStore::new(Arc::clone(&backend));
    let list_view = BookmarkStore::new(Arc::clone(&backend));
    let themes = ThemeStore::new(Arc::clone(&backend));

    detail_view.add(&create_post("shared"));
    themes.set(Theme::Dark);

    assert!(list_view.contains("shared"));
    assert_eq!(list_view.list().len(), 1);
    assert_eq!(backend.len(), 2);
}

#[test]
fn last_full_rewrite_wins() {
    let backend = Arc::new(MemoryBackend::new());
    let a = BookmarkStore::new(Arc::clone(&backend));
    let b = BookmarkStore::new(Arc::clone(&backend));

    a.add(&create_post("one"));
    b.remove("one");
    a.add(&create_post("two"));

    let ids: Vec<_> = b.list().into_iter().map(|x| x.id).collect();
    assert_eq!(ids, vec![PostId::new("two")]);
}

// ===== Properties =====

fn id_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]", 0..40)
}

proptest! {
    /// Property: list length equals the number of distinct ids added
    #[test]
    fn insert_is_idempotent(ids in id_sequence()) {
        let store = BookmarkStore::new(MemoryBackend::new());
        for id in &ids {
            store.add(&create_post(id));
        }

        let distinct: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(store.list().len(), distinct.len());
    }

    /// Property: add followed by remove of a new id restores the list
    #[test]
    fn add_remove_round_trip(ids in id_sequence()) {
        let store = BookmarkStore::new(MemoryBackend::new());
        for id in &ids {
            store.add(&create_post(id));
        }

        let before = store.list();
        store.add(&create_post("fresh-id"));
        store.remove("fresh-id");
        prop_assert_eq!(store.list(), before);
    }

    /// Property: pages tile the full list in order
    #[test]
    fn pages_tile_the_list(count in 0usize..40, limit in 1u32..10) {
        let store = BookmarkStore::new(MemoryBackend::new());
        for i in 0..count {
            store.add(&create_post(&format!("p{i}")));
        }

        let all = store.list();
        let first = store.paginate(1, limit);
        let total_pages = first.pagination.total_pages;
        prop_assert_eq!(total_pages as usize, count.div_ceil(limit as usize));

        let mut collected = Vec::new();
        for page in 1..=total_pages {
            let slice = store.paginate(page, limit);
            prop_assert_eq!(slice.pagination.has_next, page < total_pages);
            prop_assert_eq!(slice.pagination.has_prev, page > 1);
            collected.extend(slice.bookmarks);
        }
        prop_assert_eq!(collected, all);
    }
}
