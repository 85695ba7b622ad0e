//! Async driver pairing the search state with a posts API

use crate::state::{FetchTicket, SearchFilterState};
use ohohub_client::PostsApi;
use ohohub_core::Tag;
use tracing::warn;

/// Search page wired to a [`PostsApi`]
///
/// Each trigger issues its request and applies the response before
/// returning. Callers that run requests concurrently should drive
/// [`SearchFilterState`] directly and use [`fetch`](Self::fetch).
pub struct SearchSession<A> {
    api: A,
    state: SearchFilterState,
    tags: Vec<Tag>,
}

impl<A: PostsApi> SearchSession<A> {
    pub fn new(api: A) -> Self {
        Self::with_state(api, SearchFilterState::new())
    }

    pub fn with_state(api: A, state: SearchFilterState) -> Self {
        Self {
            api,
            state,
            tags: Vec::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &SearchFilterState {
        &self.state
    }

    /// Mutable state, for editing the draft
    pub fn state_mut(&mut self) -> &mut SearchFilterState {
        &mut self.state
    }

    /// Tags offered by the tag picker
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Load the tag picker; a failed request leaves it empty
    pub async fn load_tags(&mut self) -> &[Tag] {
        let response = self.api.get_tags().await;
        self.tags = if response.success {
            response.tags
        } else {
            warn!(error = ?response.error, "Failed to load tags");
            Vec::new()
        };
        &self.tags
    }

    pub async fn hydrate_from_url(&mut self, querystring: &str) -> FetchTicket {
        let ticket = self.state.hydrate_from_url(querystring);
        self.run(&ticket).await;
        ticket
    }

    pub async fn apply_search(&mut self) -> Option<FetchTicket> {
        let ticket = self.state.apply_search()?;
        self.run(&ticket).await;
        Some(ticket)
    }

    pub async fn clear_search(&mut self) -> Option<FetchTicket> {
        let ticket = self.state.clear_search()?;
        self.run(&ticket).await;
        Some(ticket)
    }

    pub async fn go_to_page(&mut self, page: u32) -> Option<FetchTicket> {
        let ticket = self.state.go_to_page(page)?;
        self.run(&ticket).await;
        Some(ticket)
    }

    /// Issue the request for `ticket` without touching the state
    pub async fn fetch(&self, ticket: &FetchTicket) -> ohohub_client::PostsResponse {
        self.api.get_posts(&ticket.query).await
    }

    async fn run(&mut self, ticket: &FetchTicket) {
        let response = self.fetch(ticket).await;
        self.state.apply_response(ticket.seq, response);
    }
}
