//! Bookmark types

use super::ids::PostId;
use super::post::{Gender, Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A locally saved reference to a post
///
/// Subset of `Post` plus the moment it entered the local store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkItem {
    pub id: PostId,
    pub title: String,
    pub x_id: Option<String>,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
    pub bookmarked_at: DateTime<Utc>,
}

impl BookmarkItem {
    /// Build a bookmark for `post`, stamped with `bookmarked_at`
    pub fn from_post(post: &Post, bookmarked_at: DateTime<Utc>) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            x_id: post.x_id.clone(),
            gender: post.gender,
            created_at: post.created_at,
            bookmarked_at,
        }
    }
}
