//! Search filter values

use ohohub_client::PostsQuery;
use ohohub_core::{Gender, TagId};

/// One set of search filters
///
/// Empty strings and `None` mean "no filter". Values are kept verbatim;
/// nothing is trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub post_title: String,
    pub x_id: String,
    pub gender: Option<Gender>,
    pub tag_id: Option<TagId>,
}

impl SearchFilters {
    /// Check if no filter is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Request for `page` of results under these filters
    pub fn to_posts_query(&self, page: u32) -> PostsQuery {
        PostsQuery {
            page: Some(page),
            limit: None,
            post_title: Some(self.post_title.clone()).filter(|t| !t.is_empty()),
            x_id: Some(self.x_id.clone()).filter(|x| !x.is_empty()),
            gender: self.gender,
            tag_id: self.tag_id,
        }
    }
}
