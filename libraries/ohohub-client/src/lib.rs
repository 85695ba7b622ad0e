//! Ohohub API Client
//!
//! HTTP client for the Ohohub posts, tags and upload API.
//!
//! # Features
//!
//! - **Posts**: paged listing with title/account/gender/tag filters, detail
//! - **Tags**: full tag list, per-post tags, posts by tag
//! - **Upload**: multipart audio upload with form validation
//!
//! Read calls made through [`PostsApi`] fail soft: a transport or parse
//! fault becomes a `success: false` envelope instead of an error.
//!
//! # Example
//!
//! ```ignore
//! use ohohub_client::{ApiConfig, OhohubClient, PostsApi, PostsQuery};
//! use ohohub_core::Gender;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OhohubClient::new(ApiConfig::default())?;
//!
//!     let query = PostsQuery::page(1).with_gender(Gender::Female);
//!     let response = client.get_posts(&query).await;
//!     println!("{} posts", response.visible_posts().len());
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
mod posts;
mod tags;
mod types;
mod upload;
pub mod validation;

// Re-export main types
pub use api::PostsApi;
pub use client::OhohubClient;
pub use error::{ClientError, Result};
pub use types::{
    ApiConfig, PostResponse, PostsQuery, PostsResponse, TagsResponse, UploadRequest,
    UploadResponse, DEFAULT_API_URL,
};
pub use upload::load_audio_file;
pub use validation::{AudioFile, FieldError, UploadField, UploadForm, ValidationErrors};

// Re-export sub-clients for direct use if needed
pub use posts::PostsClient;
pub use tags::TagsClient;
pub use upload::UploadClient;
