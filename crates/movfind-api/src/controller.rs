//! Search request/response cycle orchestration.
//!
//! `SearchController` holds the query, result, and request state for
//! one movie search view and drives the fetch cycle against a
//! `LocalTmdbApi` implementation. Page boundary gating (`has_next_page`
//! / `has_prev_page`) is exposed for the presentation layer to disable
//! controls; the controller itself only guarantees `page >= 1`.

use anyhow::Result;
use tracing::instrument;

use crate::tmdb::{LocalTmdbApi, Movie, SearchParams, SearchResponse};

/// Lifecycle of the current search request.
///
/// A single tagged union so that invalid flag combinations
/// (loading with an error set, for example) are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    /// No request has been issued yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request settled successfully.
    Succeeded,
    /// The last request failed; the message is shown to the user.
    Failed(String),
}

/// The query the user is editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Query text.
    pub text: String,
    /// Current page (always >= 1).
    pub page: u32,
}

/// Result data, replaced wholesale on every successful response and
/// cleared on failure.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Movies in response order.
    pub movies: Vec<Movie>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of results.
    pub total_results: u32,
}

/// Identifies an issued request. A settlement carrying a ticket that is
/// no longer the latest issued one is dropped, so a slow response can
/// never overwrite the state of a newer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Orchestrates one request/response cycle and the state to render it.
#[derive(Debug)]
pub struct SearchController<A> {
    /// API used to execute searches.
    api: A,
    /// Query under edit.
    query: SearchQuery,
    /// Last successful result.
    result: SearchResult,
    /// Request lifecycle state.
    state: RequestState,
    /// Generation counter of the most recently issued request.
    latest_request: u64,
}

impl<A: LocalTmdbApi> SearchController<A> {
    /// Creates a controller with an empty query on page 1.
    pub const fn new(api: A) -> Self {
        Self {
            api,
            query: SearchQuery {
                text: String::new(),
                page: 1,
            },
            result: SearchResult {
                movies: Vec::new(),
                total_pages: 0,
                total_results: 0,
            },
            state: RequestState::Idle,
            latest_request: 0,
        }
    }

    /// Read access to the underlying API client, for callers that
    /// execute the request themselves between `begin_fetch` and
    /// `settle` (e.g. to redraw while the response is awaited).
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Replaces the query text. No side effects, no validation.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    /// Current query text.
    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.query.text
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.query.page
    }

    /// Movies from the last successful response, in response order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.result.movies
    }

    /// Total pages reported by the last successful response.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.result.total_pages
    }

    /// Total results reported by the last successful response.
    #[must_use]
    pub const fn total_results(&self) -> u32 {
        self.result.total_results
    }

    /// Current request state.
    #[must_use]
    pub const fn state(&self) -> &RequestState {
        &self.state
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    /// Error message of the last failed request, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether navigating forward is meaningful right now.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        !self.is_loading() && self.query.page < self.result.total_pages
    }

    /// Whether navigating backward is meaningful right now.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        !self.is_loading() && self.query.page > 1
    }

    /// Submits the current query, resetting to page 1.
    pub async fn submit(&mut self) {
        self.fetch(1).await;
    }

    /// Fetches the next page. Saturates instead of overflowing; callers
    /// gate on `has_next_page` to stay within `total_pages`.
    pub async fn next_page(&mut self) {
        self.fetch(self.query.page.saturating_add(1)).await;
    }

    /// Fetches the previous page, never going below page 1.
    pub async fn prev_page(&mut self) {
        self.fetch(self.query.page.saturating_sub(1).max(1)).await;
    }

    /// Runs one full request/response cycle for `target_page`.
    ///
    /// The controller is never left in `Loading` afterwards: both the
    /// success and failure paths settle the request.
    #[instrument(skip_all, fields(page = target_page))]
    pub async fn fetch(&mut self, target_page: u32) {
        let (ticket, params) = self.begin_fetch(target_page);
        let outcome = self.api.search_movie(&params).await;
        self.settle(ticket, outcome);
    }

    /// Issues a new request: moves to the target page, enters `Loading`
    /// (clearing any prior error), and returns the ticket plus the
    /// parameters to execute.
    pub fn begin_fetch(&mut self, target_page: u32) -> (RequestTicket, SearchParams) {
        self.query.page = target_page.max(1);
        self.state = RequestState::Loading;
        self.latest_request = self.latest_request.wrapping_add(1);

        let params = SearchParams::new(self.query.text.clone()).page(self.query.page);
        (RequestTicket(self.latest_request), params)
    }

    /// Applies a settled outcome.
    ///
    /// Stale tickets are dropped. On success the result is replaced
    /// wholesale; on failure the movie list and totals are cleared so
    /// the view never shows pagination for results it no longer has.
    pub fn settle(&mut self, ticket: RequestTicket, outcome: Result<SearchResponse>) {
        if ticket.0 != self.latest_request {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest_request,
                "dropping stale search response"
            );
            return;
        }

        match outcome {
            Ok(response) => {
                self.result = SearchResult {
                    movies: response.results,
                    total_pages: response.total_pages,
                    total_results: response.total_results,
                };
                self.state = RequestState::Succeeded;
            }
            Err(err) => {
                self.result = SearchResult::default();
                self.state = RequestState::Failed(format!("{err:#}"));
            }
        }
    }
}
