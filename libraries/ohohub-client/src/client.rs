//! Main Ohohub API client.

use crate::api::PostsApi;
use crate::error::{ClientError, Result};
use crate::posts::PostsClient;
use crate::tags::TagsClient;
use crate::types::{
    ApiConfig, PostResponse, PostsQuery, PostsResponse, TagsResponse, UploadRequest,
    UploadResponse,
};
use crate::upload::UploadClient;
use async_trait::async_trait;
use ohohub_core::TagId;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const FETCH_POSTS_FAILED: &str = "Failed to fetch posts";
const FETCH_POST_FAILED: &str = "Failed to fetch post";
const FETCH_TAGS_FAILED: &str = "Failed to fetch tags";
const FETCH_POST_TAGS_FAILED: &str = "Failed to fetch post tags";
const FETCH_BY_TAG_FAILED: &str = "Failed to search posts by tag";

/// Client for the Ohohub posts, tags and upload API.
///
/// The `try_*` methods on the sub-clients surface every failure as a
/// [`ClientError`]. The [`PostsApi`] implementation wraps them so that read
/// calls never fail: faults come back as `success: false` envelopes.
///
/// # Example
///
/// ```ignore
/// use ohohub_client::{ApiConfig, OhohubClient, PostsApi, PostsQuery};
///
/// let client = OhohubClient::new(ApiConfig::new("http://localhost:8787"))?;
///
/// let response = client.get_posts(&PostsQuery::page(1)).await;
/// for post in response.visible_posts() {
///     println!("{} ({})", post.title, post.gender);
/// }
///
/// let tags = client.tags().try_get_tags().await?;
/// println!("{} tags", tags.tags.len());
/// ```
#[derive(Debug, Clone)]
pub struct OhohubClient {
    http: Client,
    base_url: String,
}

impl OhohubClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Ohohub/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// API base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post list and detail operations.
    pub fn posts(&self) -> PostsClient<'_> {
        PostsClient::new(&self.http, &self.base_url)
    }

    /// Tag operations.
    pub fn tags(&self) -> TagsClient<'_> {
        TagsClient::new(&self.http, &self.base_url)
    }

    /// Audio upload.
    pub fn upload(&self) -> UploadClient<'_> {
        UploadClient::new(&self.http, &self.base_url)
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = raw.trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    url::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
    Ok(url)
}

/// Decode a JSON body whatever the status
///
/// The API reports failures as `{success: false, error}` envelopes, often
/// with a 4xx/5xx status. Those envelopes are returned as-is; only an
/// unreadable body becomes an error.
pub(crate) async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str(&body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => Err(ClientError::ServerError {
            status: status.as_u16(),
            message: body,
        }),
        Err(e) => Err(ClientError::ParseError(format!(
            "Failed to parse {what} response: {e}"
        ))),
    }
}

fn fail_soft<T>(result: Result<T>, operation: &str, fallback: impl FnOnce() -> T) -> T {
    result.unwrap_or_else(|e| {
        warn!(error = %e, operation, "API call failed");
        fallback()
    })
}

#[async_trait]
impl PostsApi for OhohubClient {
    async fn get_posts(&self, query: &PostsQuery) -> PostsResponse {
        let result = self.posts().try_get_posts(query).await;
        fail_soft(result, "get_posts", || {
            PostsResponse::failure(FETCH_POSTS_FAILED)
        })
    }

    async fn get_post(&self, post_id: &str) -> PostResponse {
        let result = self.posts().try_get_post(post_id).await;
        fail_soft(result, "get_post", || PostResponse::failure(FETCH_POST_FAILED))
    }

    async fn get_tags(&self) -> TagsResponse {
        let result = self.tags().try_get_tags().await;
        fail_soft(result, "get_tags", || TagsResponse::failure(FETCH_TAGS_FAILED))
    }

    async fn get_post_tags(&self, post_id: &str) -> TagsResponse {
        let result = self.tags().try_get_post_tags(post_id).await;
        fail_soft(result, "get_post_tags", || {
            TagsResponse::failure(FETCH_POST_TAGS_FAILED)
        })
    }

    async fn get_posts_by_tag(&self, tag_id: TagId, query: &PostsQuery) -> PostsResponse {
        let result = self.posts().try_get_posts_by_tag(tag_id, query).await;
        fail_soft(result, "get_posts_by_tag", || {
            PostsResponse::failure(FETCH_BY_TAG_FAILED)
        })
    }

    async fn upload_audio(&self, request: &UploadRequest) -> Result<UploadResponse> {
        debug!(title = %request.post_title, "Uploading audio");
        self.upload().upload_audio(request).await
    }
}
