//! Tag operations.

use crate::client::read_envelope;
use crate::error::{ClientError, Result};
use crate::posts::encode_segment;
use crate::types::TagsResponse;
use reqwest::Client;
use tracing::debug;

/// Tags client for the Ohohub API.
pub struct TagsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> TagsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Get every tag.
    pub async fn try_get_tags(&self) -> Result<TagsResponse> {
        let url = format!("{}/api/tags", self.base_url);
        self.fetch(&url, "tags").await
    }

    /// Get the tags attached to one post.
    pub async fn try_get_post_tags(&self, post_id: &str) -> Result<TagsResponse> {
        let url = format!(
            "{}/api/posts/{}/tags",
            self.base_url,
            encode_segment(post_id)
        );
        self.fetch(&url, "post tags").await
    }

    async fn fetch(&self, url: &str, what: &str) -> Result<TagsResponse> {
        debug!(url = %url, "Fetching {}", what);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let tags: TagsResponse = read_envelope(response, what).await?;
        debug!(success = tags.success, count = tags.tags.len(), "Fetched {}", what);
        Ok(tags)
    }
}
