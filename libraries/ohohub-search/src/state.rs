//! Search page state machine
//!
//! Holds two filter snapshots. `draft` is what the form currently shows;
//! `applied` is what the result list, the fetch and the querystring are
//! built from. Only [`SearchFilterState::apply_search`] promotes one to the
//! other.
//!
//! The state never performs I/O. Every trigger returns a [`FetchTicket`]
//! describing the one request to issue; the caller hands the response back
//! through [`SearchFilterState::apply_response`] with the ticket's sequence
//! number. Responses that belong to a superseded ticket are dropped, so the
//! most recently triggered request always wins.
//!
//! ```text
//! Uninitialized --hydrate_from_url--> Fetching(seq)
//! Fetching(seq) --apply_response(seq)--> Ready
//! Ready | Fetching --apply_search / clear_search / go_to_page--> Fetching(seq + 1)
//! ```

use crate::filters::SearchFilters;
use crate::query::SearchQuery;
use ohohub_client::{PostsQuery, PostsResponse};
use ohohub_core::{Gender, PaginationInfo, Post, TagId};
use tracing::{debug, warn};

/// Lifecycle of the search page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// The querystring has not been read yet
    Uninitialized,
    /// Waiting for the response to request `seq`
    Fetching { seq: u64 },
    /// Showing the response to the latest request
    Ready,
}

/// One request the caller must issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Sequence number to pass back with the response
    pub seq: u64,
    /// Request for the posts API
    pub query: PostsQuery,
    /// Querystring to show in the address bar, without `?`; empty when
    /// everything is at its default
    pub querystring: String,
}

/// What the result list currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub posts: Vec<Post>,
    pub pagination: PaginationInfo,
    /// Message from a failed request
    pub error: Option<String>,
}

impl SearchResults {
    fn from_response(response: PostsResponse) -> Self {
        if response.success {
            Self {
                posts: response.posts,
                pagination: response.pagination,
                error: None,
            }
        } else {
            Self {
                error: response.error,
                ..Self::default()
            }
        }
    }
}

/// Search filters, paging and URL sync for the search page
#[derive(Debug, Clone)]
pub struct SearchFilterState {
    phase: SearchPhase,
    draft: SearchFilters,
    applied: SearchFilters,
    page: u32,
    limit: Option<u32>,
    last_seq: u64,
    results: SearchResults,
}

impl Default for SearchFilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFilterState {
    /// Create state that has not read the querystring yet
    pub fn new() -> Self {
        Self {
            phase: SearchPhase::Uninitialized,
            draft: SearchFilters::default(),
            applied: SearchFilters::default(),
            page: 1,
            limit: None,
            last_seq: 0,
            results: SearchResults::default(),
        }
    }

    /// Request `limit` posts per page instead of the API default
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    // ===== Triggers =====

    /// Load draft, applied and page from the querystring and fetch
    ///
    /// This is the first trigger on page load. Calling it again re-reads
    /// the querystring, as when the user navigates back.
    pub fn hydrate_from_url(&mut self, querystring: &str) -> FetchTicket {
        let SearchQuery { filters, page } = SearchQuery::from_query_string(querystring);
        debug!(?filters, page, "Hydrated search state from URL");

        self.draft = filters.clone();
        self.applied = filters;
        self.page = page;
        self.issue()
    }

    /// Promote the draft to applied and fetch its first page
    pub fn apply_search(&mut self) -> Option<FetchTicket> {
        if !self.ensure_hydrated("apply_search") {
            return None;
        }

        self.applied = self.draft.clone();
        self.page = 1;
        Some(self.issue())
    }

    /// Reset both snapshots and fetch the unfiltered first page
    pub fn clear_search(&mut self) -> Option<FetchTicket> {
        if !self.ensure_hydrated("clear_search") {
            return None;
        }

        self.draft = SearchFilters::default();
        self.applied = SearchFilters::default();
        self.page = 1;
        Some(self.issue())
    }

    /// Fetch `page` under the applied filters
    ///
    /// The page is not checked against the known page count; the API's own
    /// pagination decides what an out-of-range page returns.
    pub fn go_to_page(&mut self, page: u32) -> Option<FetchTicket> {
        if !self.ensure_hydrated("go_to_page") {
            return None;
        }

        self.page = page;
        Some(self.issue())
    }

    // ===== Draft editing =====

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.post_title = title.into();
    }

    pub fn set_draft_x_id(&mut self, x_id: impl Into<String>) {
        self.draft.x_id = x_id.into();
    }

    pub fn set_draft_gender(&mut self, gender: Option<Gender>) {
        self.draft.gender = gender;
    }

    /// Pick a tag in the draft; takes effect on the next search
    pub fn select_tag(&mut self, tag_id: TagId) {
        self.draft.tag_id = Some(tag_id);
    }

    /// Drop the draft tag; takes effect on the next search
    pub fn remove_tag(&mut self) {
        self.draft.tag_id = None;
    }

    // ===== Responses =====

    /// Record the response to request `seq`
    ///
    /// Returns false and changes nothing when `seq` is not the latest
    /// request. A failed response shows zero results.
    pub fn apply_response(&mut self, seq: u64, response: PostsResponse) -> bool {
        if seq != self.last_seq || self.phase == SearchPhase::Uninitialized {
            warn!(seq, latest = self.last_seq, "Dropping stale search response");
            return false;
        }

        if !response.success {
            warn!(seq, error = ?response.error, "Search request failed");
        }

        self.results = SearchResults::from_response(response);
        self.phase = SearchPhase::Ready;
        debug!(
            seq,
            count = self.results.posts.len(),
            total = self.results.pagination.total_items,
            "Search results updated"
        );
        true
    }

    // ===== Queries =====

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Check if a request is outstanding
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Fetching { .. })
    }

    pub fn draft(&self) -> &SearchFilters {
        &self.draft
    }

    pub fn applied(&self) -> &SearchFilters {
        &self.applied
    }

    /// Current page number
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Applied filters and page, as the address bar shows them
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(self.applied.clone(), self.page)
    }

    /// Querystring for the applied filters and page, without `?`
    pub fn querystring(&self) -> String {
        self.query().to_query_string()
    }

    fn ensure_hydrated(&self, operation: &str) -> bool {
        if self.phase == SearchPhase::Uninitialized {
            warn!(operation, "Search state used before hydrating from URL");
            false
        } else {
            true
        }
    }

    fn issue(&mut self) -> FetchTicket {
        self.last_seq += 1;
        let seq = self.last_seq;
        self.phase = SearchPhase::Fetching { seq };

        let mut query = self.applied.to_posts_query(self.page);
        query.limit = self.limit;

        debug!(seq, page = self.page, "Issuing search request");

        FetchTicket {
            seq,
            query,
            querystring: self.querystring(),
        }
    }
}
