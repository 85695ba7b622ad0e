//! Ohohub Storage
//!
//! Client-local persistent state for Ohohub.
//!
//! State lives in a flat key-value namespace, the same shape as a browser's
//! local storage: one key holds the JSON list of bookmarks, another the
//! selected display theme. The namespace is reached through the
//! [`KeyValueBackend`] trait so tests run against [`MemoryBackend`] and
//! native builds persist through [`FileBackend`].
//!
//! Every read and write used by the page layer fails soft: corrupt data or
//! a rejected write degrades to "empty store / write skipped" plus a
//! `tracing` diagnostic, never a panic or an error returned to the page.
//!
//! # Example
//!
//! ```rust
//! use ohohub_storage::{BookmarkStore, MemoryBackend};
//!
//! let store = BookmarkStore::new(MemoryBackend::new());
//! assert!(store.list().is_empty());
//! assert!(!store.contains("p1"));
//! ```

pub mod backend;
pub mod bookmarks;
pub mod error;
pub mod settings;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use bookmarks::{BookmarkPage, BookmarkStore, BOOKMARK_STORAGE_KEY, DEFAULT_PAGE_SIZE};
pub use error::{Result, StorageError};
pub use settings::{ThemeStore, THEME_STORAGE_KEY};
