//! Post list and detail operations.

use crate::client::read_envelope;
use crate::error::{ClientError, Result};
use crate::types::{PostResponse, PostsQuery, PostsResponse};
use ohohub_core::TagId;
use reqwest::Client;
use tracing::debug;

/// Posts client for the Ohohub API.
pub struct PostsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> PostsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Get one page of posts matching `query`.
    pub async fn try_get_posts(&self, query: &PostsQuery) -> Result<PostsResponse> {
        let url = format!("{}/api/posts", self.base_url);
        let params = query.to_pairs();
        debug!(url = %url, params = ?params, "Fetching posts");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let posts: PostsResponse = read_envelope(response, "posts").await?;

        debug!(
            success = posts.success,
            count = posts.posts.len(),
            page = posts.pagination.current_page,
            total = posts.pagination.total_items,
            "Fetched posts"
        );

        Ok(posts)
    }

    /// Get a single post by ID.
    pub async fn try_get_post(&self, post_id: &str) -> Result<PostResponse> {
        let url = format!("{}/api/post/{}", self.base_url, encode_segment(post_id));
        debug!(url = %url, post_id = %post_id, "Fetching post");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        read_envelope(response, "post").await
    }

    /// Get posts carrying `tag_id`, further filtered by `query`.
    ///
    /// Any `tag_id` already set on `query` is ignored.
    pub async fn try_get_posts_by_tag(
        &self,
        tag_id: TagId,
        query: &PostsQuery,
    ) -> Result<PostsResponse> {
        let url = format!("{}/api/posts/by-tag", self.base_url);

        let mut params = vec![("tagId", tag_id.to_string())];
        params.extend(
            PostsQuery {
                tag_id: None,
                ..query.clone()
            }
            .to_pairs(),
        );

        debug!(url = %url, params = ?params, "Fetching posts by tag");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        read_envelope(response, "posts by tag").await
    }
}

/// Percent-encode a value for use as one path segment.
pub(crate) fn encode_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
