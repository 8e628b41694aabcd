//! Search view TUI main loop.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use movfind_api::controller::SearchController;
use movfind_api::tmdb::LocalTmdbApi;

use super::state::{InputMode, SearchViewState};
use super::ui;

/// Action requested by a key handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Exit the view.
    Quit,
    /// Submit the current query (page 1).
    Submit,
    /// Fetch the next page.
    NextPage,
    /// Fetch the previous page.
    PrevPage,
}

/// Runs the interactive search view.
///
/// When `initial_query` is non-empty, a search is issued immediately.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails.
pub async fn run_search_view<A: LocalTmdbApi>(api: A, initial_query: Option<String>) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut state = SearchViewState::new(SearchController::new(api));
    if let Some(query) = initial_query
        && !query.is_empty()
    {
        state.controller.set_query_text(query);
    }

    let result = run_event_loop(&mut terminal, &mut state).await;

    // Cleanup (always attempt even if event loop failed)
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;

    result
}

/// Main event loop.
async fn run_event_loop<A: LocalTmdbApi>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut SearchViewState<A>,
) -> Result<()> {
    if !state.controller.query_text().is_empty() {
        run_fetch(terminal, state, 1).await?;
    }

    loop {
        terminal
            .draw(|frame| ui::draw(frame, state))
            .context("failed to draw TUI")?;

        if event::poll(Duration::from_millis(100)).context("failed to poll events")?
            && let Event::Key(key) = event::read().context("failed to read event")?
            && key.kind == KeyEventKind::Press
        {
            let action = match state.input_mode {
                InputMode::Edit => handle_edit_input(state, key.code, key.modifiers),
                InputMode::Results => handle_results_input(state, key.code, key.modifiers),
            };

            match action {
                Some(Action::Quit) => return Ok(()),
                Some(Action::Submit) => run_fetch(terminal, state, 1).await?,
                Some(Action::NextPage) => {
                    let target = state.controller.page().saturating_add(1);
                    run_fetch(terminal, state, target).await?;
                }
                Some(Action::PrevPage) => {
                    let target = state.controller.page().saturating_sub(1).max(1);
                    run_fetch(terminal, state, target).await?;
                }
                None => {}
            }
        }
    }
}

/// Issues a request, redraws so the loading indicator is visible while
/// the response is awaited, then settles and resets the cursor.
///
/// The view blocks on the await, so only one request is ever in flight.
async fn run_fetch<A: LocalTmdbApi>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut SearchViewState<A>,
    target_page: u32,
) -> Result<()> {
    let (ticket, params) = state.controller.begin_fetch(target_page);
    terminal
        .draw(|frame| ui::draw(frame, state))
        .context("failed to draw TUI")?;

    let outcome = state.controller.api().search_movie(&params).await;
    state.controller.settle(ticket, outcome);
    state.reset_cursor();

    if !state.controller.movies().is_empty() {
        state.input_mode = InputMode::Results;
    }

    Ok(())
}

/// Handles key input in edit mode. Returns the action to run, if any.
fn handle_edit_input<A: LocalTmdbApi>(
    state: &mut SearchViewState<A>,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> Option<Action> {
    match key {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Quit);
        }
        KeyCode::Esc => {
            state.input_mode = InputMode::Results;
        }
        KeyCode::Enter => {
            // Empty queries are not submitted (the "required" input).
            if !state.controller.query_text().is_empty() {
                return Some(Action::Submit);
            }
        }
        KeyCode::Backspace => {
            state.query_pop();
        }
        KeyCode::Char(c) => {
            state.query_push(c);
        }
        _ => {}
    }
    None
}

/// Handles key input in results mode. Returns the action to run, if any.
fn handle_results_input<A: LocalTmdbApi>(
    state: &mut SearchViewState<A>,
    key: KeyCode,
    modifiers: KeyModifiers,
) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Quit);
        }
        KeyCode::Char('/') | KeyCode::Char('e') => {
            state.input_mode = InputMode::Edit;
        }
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::Right | KeyCode::Char('n') if state.controller.has_next_page() => {
            return Some(Action::NextPage);
        }
        KeyCode::Left | KeyCode::Char('p') if state.controller.has_prev_page() => {
            return Some(Action::PrevPage);
        }
        _ => {}
    }
    None
}
