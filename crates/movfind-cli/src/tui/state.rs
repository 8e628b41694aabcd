//! Search view state management.

use movfind_api::controller::SearchController;
use movfind_api::tmdb::LocalTmdbApi;

/// Input mode for the search view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Editing the query text.
    Edit,
    /// Navigating the result list.
    Results,
}

/// State for the search view TUI.
///
/// Wraps the `SearchController` (query/result/request state) with the
/// view-only concerns: input mode and the result-list cursor.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SearchViewState<A> {
    /// Controller holding search state and actions.
    pub controller: SearchController<A>,
    /// Current input mode.
    pub input_mode: InputMode,
    /// Cursor position in the result list.
    pub cursor: usize,
}

impl<A: LocalTmdbApi> SearchViewState<A> {
    /// Creates a new view state starting in edit mode.
    pub const fn new(controller: SearchController<A>) -> Self {
        Self {
            controller,
            input_mode: InputMode::Edit,
            cursor: 0,
        }
    }

    /// Appends a character to the query text.
    pub fn query_push(&mut self, ch: char) {
        let mut text = String::from(self.controller.query_text());
        text.push(ch);
        self.controller.set_query_text(text);
    }

    /// Removes the last character from the query text.
    pub fn query_pop(&mut self) {
        let mut text = String::from(self.controller.query_text());
        text.pop();
        self.controller.set_query_text(text);
    }

    /// Moves the result cursor up.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Moves the result cursor down.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.controller.movies().len() {
            self.cursor += 1;
        }
    }

    /// Resets the cursor after the result list was replaced.
    pub const fn reset_cursor(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use anyhow::Result;
    use movfind_api::tmdb::{Movie, SearchParams, SearchResponse};

    use super::*;

    /// Stub API that always returns a fixed page of three movies.
    #[derive(Debug)]
    struct StubApi;

    impl LocalTmdbApi for StubApi {
        async fn search_movie(&self, _params: &SearchParams) -> Result<SearchResponse> {
            let results = (1..=3)
                .map(|id| Movie {
                    id,
                    title: format!("Movie {id}"),
                    release_date: String::new(),
                    overview: String::new(),
                    poster_path: None,
                })
                .collect();
            Ok(SearchResponse {
                page: 1,
                results,
                total_pages: 1,
                total_results: 3,
            })
        }
    }

    fn make_test_state() -> SearchViewState<StubApi> {
        SearchViewState::new(SearchController::new(StubApi))
    }

    #[test]
    fn test_initial_state() {
        // Arrange & Act
        let state = make_test_state();

        // Assert
        assert_eq!(state.input_mode, InputMode::Edit);
        assert_eq!(state.cursor, 0);
        assert!(state.controller.query_text().is_empty());
    }

    #[test]
    fn test_query_push_pop() {
        // Arrange
        let mut state = make_test_state();

        // Act
        state.query_push('M');
        state.query_push('a');
        state.query_push('t');

        // Assert
        assert_eq!(state.controller.query_text(), "Mat");

        // Act
        state.query_pop();

        // Assert
        assert_eq!(state.controller.query_text(), "Ma");
    }

    #[tokio::test]
    async fn test_cursor_clamped_to_result_list() {
        // Arrange
        let mut state = make_test_state();
        state.controller.set_query_text("Movie");
        state.controller.submit().await;

        // Act & Assert: three results, cursor stops at index 2
        state.move_down();
        state.move_down();
        assert_eq!(state.cursor, 2);

        state.move_down();
        assert_eq!(state.cursor, 2);

        state.move_up();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_cursor_does_not_underflow() {
        // Arrange
        let mut state = make_test_state();

        // Act
        state.move_up();

        // Assert
        assert_eq!(state.cursor, 0);
    }

    #[tokio::test]
    async fn test_reset_cursor() {
        // Arrange
        let mut state = make_test_state();
        state.controller.set_query_text("Movie");
        state.controller.submit().await;
        state.move_down();

        // Act
        state.reset_cursor();

        // Assert
        assert_eq!(state.cursor, 0);
    }
}
