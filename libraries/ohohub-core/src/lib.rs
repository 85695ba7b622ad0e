//! Ohohub Core
//!
//! Platform-agnostic domain types, helpers and error handling for the Ohohub
//! audio-sharing client.
//!
//! This crate provides the foundational building blocks shared by the storage,
//! playback, API client and search crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Post`, `Tag`, `BookmarkItem`, `PaginationInfo`, `Theme`
//! - **Password codec**: salted SHA-256 encoding of delete-passwords
//! - **Display helpers**: relative time and pagination windows
//! - **Error Handling**: Unified `HubError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use ohohub_core::password;
//! use ohohub_core::PaginationInfo;
//!
//! // Encode a delete-password as a single storable column
//! let stored = password::prepare_for_storage("s3cret");
//! assert!(password::verify("s3cret", &stored));
//!
//! // Compute pagination for 31 items, 15 per page
//! let info = PaginationInfo::compute(2, 15, 31);
//! assert_eq!(info.total_pages, 3);
//! assert!(info.has_next && info.has_prev);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod password;
pub mod time;
pub mod types;

// Re-export commonly used types
pub use error::{HubError, Result};
pub use types::{
    page_window, BookmarkItem, Gender, PageWindow, PaginationInfo, Post, PostId, Tag, TagId,
    Theme,
};
