//! TUI module for the interactive movie search view.
//!
//! Uses `ratatui` + `crossterm` for rendering.

mod search_view;
/// Search view state types.
pub mod state;
mod ui;

pub use search_view::run_search_view;
