//! Landing page feed

use ohohub_client::{PostsApi, PostsQuery, PostsResponse};
use ohohub_core::{Gender, Post};
use tracing::debug;

pub const FEMALE_SECTION_SIZE: usize = 5;
pub const MALE_SECTION_SIZE: usize = 5;
pub const LATEST_SECTION_SIZE: usize = 10;

/// The three sections of the landing page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeFeed {
    pub female: Vec<Post>,
    pub male: Vec<Post>,
    pub latest: Vec<Post>,
}

impl HomeFeed {
    /// Fetch all three sections concurrently
    ///
    /// A section whose request fails is empty; the others are unaffected.
    pub async fn load<A: PostsApi + ?Sized>(api: &A) -> Self {
        let female_query = PostsQuery::page(1).with_gender(Gender::Female);
        let male_query = PostsQuery::page(1).with_gender(Gender::Male);
        let latest_query = PostsQuery::page(1);

        let (female, male, latest) = futures_util::future::join3(
            api.get_posts(&female_query),
            api.get_posts(&male_query),
            api.get_posts(&latest_query),
        )
        .await;

        let feed = Self {
            female: section(female, FEMALE_SECTION_SIZE),
            male: section(male, MALE_SECTION_SIZE),
            latest: section(latest, LATEST_SECTION_SIZE),
        };

        debug!(
            female = feed.female.len(),
            male = feed.male.len(),
            latest = feed.latest.len(),
            "Loaded home feed"
        );
        feed
    }

    pub fn is_empty(&self) -> bool {
        self.female.is_empty() && self.male.is_empty() && self.latest.is_empty()
    }
}

fn section(response: PostsResponse, size: usize) -> Vec<Post> {
    if response.success {
        response.posts.into_iter().take(size).collect()
    } else {
        Vec::new()
    }
}
