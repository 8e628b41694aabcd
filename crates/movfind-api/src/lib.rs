//! API client library for movfind.
//!
//! Provides a typed client for the TMDB movie search API and the
//! `SearchController` that orchestrates one request/response cycle
//! for a presentation layer.

/// Search request/response cycle orchestration.
pub mod controller;

/// TMDB API client.
pub mod tmdb;
