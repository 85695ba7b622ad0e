//! Bookmark persistence
//!
//! Bookmarks are stored as one JSON array under [`BOOKMARK_STORAGE_KEY`],
//! newest first. Every mutation rewrites the full list.
//!
//! # Example
//!
//! ```rust
//! use ohohub_storage::{BookmarkStore, MemoryBackend};
//!
//! let store = BookmarkStore::new(MemoryBackend::new());
//! let page = store.paginate(1, 15);
//! assert_eq!(page.pagination.total_items, 0);
//! assert!(!page.pagination.has_next);
//! ```

use crate::backend::KeyValueBackend;
use crate::error::{Result, StorageError};
use chrono::{DateTime, Utc};
use ohohub_core::{BookmarkItem, PaginationInfo, Post};
use tracing::{debug, error};

/// Storage key holding the bookmark list
pub const BOOKMARK_STORAGE_KEY: &str = "ohohub-bookmarks";

/// Bookmarks shown per page on the bookmarks view
pub const DEFAULT_PAGE_SIZE: u32 = 15;

/// One page of bookmarks plus its paging metadata
#[derive(Debug, Clone, PartialEq)]
pub struct BookmarkPage {
    pub bookmarks: Vec<BookmarkItem>,
    pub pagination: PaginationInfo,
}

/// Local list of bookmarked posts
///
/// At most one item per post id; the most recent bookmark is first.
pub struct BookmarkStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> BookmarkStore<B> {
    /// Create a store over `backend`
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the stored list, surfacing storage and parse errors
    pub fn try_list(&self) -> Result<Vec<BookmarkItem>> {
        match self.backend.get(BOOKMARK_STORAGE_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// All bookmarks, newest first
    ///
    /// A storage or parse fault is logged and reads as an empty list.
    pub fn list(&self) -> Vec<BookmarkItem> {
        self.try_list().unwrap_or_else(|e| {
            error!(error = %e, key = BOOKMARK_STORAGE_KEY, "Failed to read bookmarks");
            Vec::new()
        })
    }

    /// Bookmark `post`, stamped with the current time
    ///
    /// Returns true if the post was newly bookmarked and stored.
    pub fn add(&self, post: &Post) -> bool {
        self.add_at(post, Utc::now())
    }

    /// Bookmark `post` with an explicit `bookmarked_at`
    ///
    /// Already-bookmarked posts are left untouched, including their
    /// original `bookmarked_at`.
    pub fn add_at(&self, post: &Post, bookmarked_at: DateTime<Utc>) -> bool {
        let mut bookmarks = self.list();

        if bookmarks.iter().any(|b| b.id == post.id) {
            debug!(post_id = %post.id, "Post already bookmarked");
            return false;
        }

        bookmarks.insert(0, BookmarkItem::from_post(post, bookmarked_at));
        self.persist(&bookmarks)
    }

    /// Remove the bookmark for `id`; unknown ids are a no-op
    pub fn remove(&self, id: &str) {
        let mut bookmarks = self.list();
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id != id);

        if bookmarks.len() != before {
            self.persist(&bookmarks);
        }
    }

    /// Check whether `id` is bookmarked; storage faults read as false
    pub fn contains(&self, id: &str) -> bool {
        match self.try_list() {
            Ok(bookmarks) => bookmarks.iter().any(|b| b.id == id),
            Err(e) => {
                error!(error = %e, post_id = id, "Failed to check bookmark state");
                false
            }
        }
    }

    /// Flip the bookmark state of `post`, returning the new state
    pub fn toggle(&self, post: &Post) -> bool {
        if self.contains(post.id.as_str()) {
            self.remove(post.id.as_str());
            false
        } else {
            self.add(post)
        }
    }

    /// Slice the list into pages of `limit`
    ///
    /// `page` is not clamped; a page past the end yields no items.
    pub fn paginate(&self, page: u32, limit: u32) -> BookmarkPage {
        let all = self.list();
        let total_items = u32::try_from(all.len()).unwrap_or(u32::MAX);
        let range = PaginationInfo::slice_bounds(page, limit);

        let bookmarks = all
            .into_iter()
            .skip(range.start)
            .take(range.end - range.start)
            .collect();

        BookmarkPage {
            bookmarks,
            pagination: PaginationInfo::compute(page, limit, total_items),
        }
    }

    fn persist(&self, bookmarks: &[BookmarkItem]) -> bool {
        let result = serde_json::to_string(bookmarks)
            .map_err(StorageError::from)
            .and_then(|json| self.backend.set(BOOKMARK_STORAGE_KEY, &json));

        match result {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, key = BOOKMARK_STORAGE_KEY, "Failed to write bookmarks");
                false
            }
        }
    }
}
