//! Ohohub - Search
//!
//! Filter, paging and URL state for the search page, plus the landing page
//! feed.
//!
//! - [`SearchFilterState`] is a pure state machine: it owns the draft and
//!   applied filters and the page, and hands out one [`FetchTicket`] per
//!   trigger. Out-of-order responses are dropped by sequence number.
//! - [`SearchQuery`] converts between the applied filters and the
//!   shareable querystring.
//! - [`SearchSession`] drives the state against a
//!   [`PostsApi`](ohohub_client::PostsApi).
//! - [`HomeFeed`] loads the three landing page sections concurrently.
//!
//! # Example
//!
//! ```rust
//! use ohohub_core::Gender;
//! use ohohub_search::SearchFilterState;
//!
//! let mut state = SearchFilterState::new();
//! let ticket = state.hydrate_from_url("?gender=female&page=2");
//! assert_eq!(ticket.query.page, Some(2));
//! assert_eq!(ticket.query.gender, Some(Gender::Female));
//!
//! state.set_draft_title("rain");
//! let ticket = state.apply_search().unwrap();
//! assert_eq!(ticket.querystring, "title=rain&gender=female");
//!
//! let ticket = state.clear_search().unwrap();
//! assert_eq!(ticket.querystring, "");
//! ```

mod filters;
mod home;
mod query;
mod session;
mod state;

pub use filters::SearchFilters;
pub use home::{HomeFeed, FEMALE_SECTION_SIZE, LATEST_SECTION_SIZE, MALE_SECTION_SIZE};
pub use query::SearchQuery;
pub use session::SearchSession;
pub use state::{FetchTicket, SearchFilterState, SearchPhase, SearchResults};
