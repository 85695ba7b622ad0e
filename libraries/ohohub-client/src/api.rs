//! The Posts API seam.

use crate::error::Result;
use crate::types::{
    PostResponse, PostsQuery, PostsResponse, TagsResponse, UploadRequest, UploadResponse,
};
use async_trait::async_trait;
use ohohub_core::TagId;

/// Operations the pages need from the Ohohub API.
///
/// Read operations never fail: transport and parse faults come back as
/// envelopes with `success: false` and an `error` message. Implemented by
/// [`OhohubClient`](crate::OhohubClient); tests substitute their own.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// One page of posts matching `query`
    async fn get_posts(&self, query: &PostsQuery) -> PostsResponse;

    /// A single post
    async fn get_post(&self, post_id: &str) -> PostResponse;

    /// Every tag
    async fn get_tags(&self) -> TagsResponse;

    /// Tags attached to one post
    async fn get_post_tags(&self, post_id: &str) -> TagsResponse;

    /// Posts carrying `tag_id`, further filtered by `query`
    async fn get_posts_by_tag(&self, tag_id: TagId, query: &PostsQuery) -> PostsResponse;

    /// Submit a validated upload
    async fn upload_audio(&self, request: &UploadRequest) -> Result<UploadResponse>;
}
