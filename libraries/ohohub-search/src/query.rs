//! Querystring codec for the search page
//!
//! Recognized parameters are `page`, `title` (or `postTitle`), `xId`,
//! `gender` and `tagId`. Anything else is ignored. Generated querystrings
//! omit every parameter that holds its default, so the unfiltered first
//! page has no querystring at all.

use crate::filters::SearchFilters;
use ohohub_core::{Gender, TagId};
use url::form_urlencoded;

/// Filters plus page, as carried in the address bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub filters: SearchFilters,
    pub page: u32,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            filters: SearchFilters::default(),
            page: 1,
        }
    }
}

impl SearchQuery {
    pub fn new(filters: SearchFilters, page: u32) -> Self {
        Self { filters, page }
    }

    /// Parse a querystring, with or without the leading `?`
    ///
    /// Malformed values fall back to their defaults: a `page` that is not a
    /// positive integer reads as 1, an unparsable or zero `tagId` as no tag, and any
    /// `gender` other than `male`/`female` (including `all`) as no filter.
    /// When a parameter repeats, its first value is used.
    pub fn from_query_string(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut page = None;
        let mut title = None;
        let mut post_title = None;
        let mut x_id = None;
        let mut gender = None;
        let mut tag_id = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "page" => &mut page,
                "title" => &mut title,
                "postTitle" => &mut post_title,
                "xId" => &mut x_id,
                "gender" => &mut gender,
                "tagId" => &mut tag_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        let filters = SearchFilters {
            post_title: title.or(post_title).unwrap_or_default(),
            x_id: x_id.unwrap_or_default(),
            gender: gender.as_deref().and_then(parse_gender),
            tag_id: tag_id.as_deref().and_then(parse_tag_id),
        };

        Self {
            filters,
            page: page.as_deref().and_then(parse_page).unwrap_or(1),
        }
    }

    /// Render as a querystring without the leading `?`
    ///
    /// Parameters appear in the order `page`, `title`, `xId`, `gender`,
    /// `tagId`; defaults are left out.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if self.page != 1 {
            serializer.append_pair("page", &self.page.to_string());
        }
        if !self.filters.post_title.is_empty() {
            serializer.append_pair("title", &self.filters.post_title);
        }
        if !self.filters.x_id.is_empty() {
            serializer.append_pair("xId", &self.filters.x_id);
        }
        if let Some(gender) = self.filters.gender {
            serializer.append_pair("gender", gender.as_str());
        }
        if let Some(tag_id) = self.filters.tag_id.filter(|t| *t != 0) {
            serializer.append_pair("tagId", &tag_id.to_string());
        }

        serializer.finish()
    }

    /// `path` with this query appended, if any
    pub fn to_url(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

fn parse_page(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|page| *page >= 1)
}

fn parse_gender(value: &str) -> Option<Gender> {
    value.parse().ok()
}

fn parse_tag_id(value: &str) -> Option<TagId> {
    value.trim().parse::<TagId>().ok().filter(|tag_id| *tag_id != 0)
}
