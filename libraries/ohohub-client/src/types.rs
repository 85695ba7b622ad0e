//! Types for Ohohub API requests and responses.

use ohohub_core::{Gender, PaginationInfo, Post, Tag, TagId};
use serde::{Deserialize, Serialize};

/// Fallback API base used when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8787";

/// Configuration for connecting to the Ohohub API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://api.ohohub.example")
    pub base_url: String,
}

impl ApiConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

// =============================================================================
// Posts
// =============================================================================

/// Query parameters for the posts list endpoints.
///
/// Unset, empty and zero values are left off the request; the API reads
/// their absence as "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub post_title: Option<String>,
    pub x_id: Option<String>,
    pub gender: Option<Gender>,
    pub tag_id: Option<TagId>,
}

impl PostsQuery {
    /// Query for one page with no filters.
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.post_title = Some(title.into());
        self
    }

    pub fn with_x_id(mut self, x_id: impl Into<String>) -> Self {
        self.x_id = Some(x_id.into());
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_tag(mut self, tag_id: TagId) -> Self {
        self.tag_id = Some(tag_id);
        self
    }

    /// Querystring pairs in request order, skipping unset filters.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(page) = self.page.filter(|p| *p != 0) {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l != 0) {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(title) = self.post_title.as_deref().filter(|t| !t.is_empty()) {
            pairs.push(("postTitle", title.to_string()));
        }
        if let Some(x_id) = self.x_id.as_deref().filter(|x| !x.is_empty()) {
            pairs.push(("xId", x_id.to_string()));
        }
        if let Some(gender) = self.gender {
            pairs.push(("gender", gender.as_str().to_string()));
        }
        if let Some(tag_id) = self.tag_id.filter(|t| *t != 0) {
            pairs.push(("tagId", tag_id.to_string()));
        }

        pairs
    }
}

/// Envelope returned by the posts list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsResponse {
    pub success: bool,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub pagination: PaginationInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PostsResponse {
    /// Empty failure envelope carrying `error`.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            posts: Vec::new(),
            pagination: PaginationInfo::default(),
            error: Some(error.into()),
        }
    }

    /// Posts to display; a failed response shows none.
    pub fn visible_posts(&self) -> &[Post] {
        if self.success {
            &self.posts
        } else {
            &[]
        }
    }
}

/// Envelope returned by the post detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PostResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            post: None,
            error: Some(error.into()),
        }
    }
}

// =============================================================================
// Tags
// =============================================================================

/// Envelope returned by the tag endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagsResponse {
    pub success: bool,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TagsResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            tags: Vec::new(),
            error: Some(error.into()),
        }
    }
}

// =============================================================================
// Upload
// =============================================================================

/// A validated upload, ready to send.
///
/// Built by [`UploadForm::validate`](crate::UploadForm::validate); the
/// delete-password is already in `salt:hash` storage form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file_name: String,
    pub mime_type: String,
    pub audio: Vec<u8>,
    pub post_title: String,
    pub x_id: String,
    pub delete_password: String,
    pub allow_promotion: bool,
    pub gender: Gender,
}

/// Acknowledgement from the upload endpoint.
///
/// Only `success` and `error` have a fixed meaning; anything else the
/// server sends is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
