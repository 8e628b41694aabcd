//! TMDB API response types and search parameters.

use serde::Deserialize;

/// Base URL template for poster images (w500 rendition).
const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Parameters for the `search/movie` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query (required).
    pub query: String,
    /// Result page (1-based, default: 1).
    pub page: u32,
}

impl SearchParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
        }
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Response from the `search/movie` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Search results (empty when absent).
    #[serde(default)]
    pub results: Vec<Movie>,
    /// Total number of pages (0 when absent).
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results (0 when absent).
    #[serde(default)]
    pub total_results: u32,
}

/// A single movie search result.
#[derive(Debug, Clone, Deserialize)]
pub struct Movie {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Release date (YYYY-MM-DD, may be empty).
    #[serde(default)]
    pub release_date: String,
    /// Overview text (may be empty).
    #[serde(default)]
    pub overview: String,
    /// Poster image path (nullable).
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    /// Derives the full poster image URL from `poster_path`.
    ///
    /// Returns `None` when the movie has no poster.
    #[must_use]
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{POSTER_BASE_URL}{path}"))
    }
}

/// TMDB API error body for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbErrorResponse {
    /// TMDB-internal status code.
    pub status_code: u32,
    /// Human-readable error message.
    pub status_message: String,
    /// Always `false` for error bodies.
    pub success: bool,
}
