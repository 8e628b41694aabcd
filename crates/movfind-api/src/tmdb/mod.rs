//! TMDB movie search API client module.
//!
//! Handles HTTP requests to the `search/movie` endpoint and maps the
//! JSON response onto typed result structures.

mod api;
mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{Movie, SearchParams, SearchResponse, TmdbErrorResponse};
