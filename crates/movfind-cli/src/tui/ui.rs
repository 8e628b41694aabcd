//! TUI rendering logic for the search view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use movfind_api::controller::RequestState;
use movfind_api::tmdb::LocalTmdbApi;

use super::state::{InputMode, SearchViewState};

/// Max overview characters shown per result row.
const OVERVIEW_PREVIEW_CHARS: usize = 110;

/// Draws the search view UI.
#[allow(clippy::indexing_slicing)]
pub fn draw<A: LocalTmdbApi>(frame: &mut Frame, state: &SearchViewState<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // result list
            Constraint::Length(3), // footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], state);
    draw_results(frame, chunks[1], state);
    draw_footer(frame, chunks[2], state);
}

/// Draws the header with the query input and pagination info.
#[allow(clippy::indexing_slicing)]
fn draw_header<A: LocalTmdbApi>(frame: &mut Frame, area: Rect, state: &SearchViewState<A>) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let query_style = if state.input_mode == InputMode::Edit {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let query = Paragraph::new(String::from(state.controller.query_text()))
        .style(query_style)
        .block(Block::default().borders(Borders::ALL).title(" Query "));
    frame.render_widget(query, header_chunks[0]);

    let page_text = if state.controller.total_results() > 0 {
        format!(
            "Page {} of {} | Results: {}",
            state.controller.page(),
            state.controller.total_pages(),
            state.controller.total_results(),
        )
    } else {
        String::new()
    };
    let info = Paragraph::new(page_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Movie Finder "),
    );
    frame.render_widget(info, header_chunks[1]);
}

/// Draws the result list.
fn draw_results<A: LocalTmdbApi>(frame: &mut Frame, area: Rect, state: &SearchViewState<A>) {
    let is_active = state.input_mode == InputMode::Results;
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = state
        .controller
        .movies()
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let marker = if i == state.cursor && is_active {
                "\u{25b8} "
            } else {
                "  "
            };

            let title_style = if i == state.cursor && is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            let date = if movie.release_date.is_empty() {
                "-"
            } else {
                movie.release_date.as_str()
            };

            let overview: String = movie.overview.chars().take(OVERVIEW_PREVIEW_CHARS).collect();

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(String::from(marker)),
                    Span::styled(movie.title.clone(), title_style),
                    Span::raw(format!("  ({date})")),
                ]),
                Line::from(Span::styled(
                    format!("    {overview}"),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Results "),
    );
    frame.render_widget(list, area);
}

/// Draws the footer with status and key hints.
fn draw_footer<A: LocalTmdbApi>(frame: &mut Frame, area: Rect, state: &SearchViewState<A>) {
    let status: Line = match state.controller.state() {
        RequestState::Loading => Line::from(Span::styled(
            "Searching...",
            Style::default().fg(Color::Yellow),
        )),
        RequestState::Failed(message) => Line::from(Span::styled(
            format!("Error: {message}"),
            Style::default().fg(Color::Red),
        )),
        RequestState::Succeeded if state.controller.movies().is_empty() => {
            Line::from(Span::raw("No results"))
        }
        RequestState::Succeeded | RequestState::Idle => Line::from(hints(state)),
    };

    let footer = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Key hints for the current input mode.
fn hints<A: LocalTmdbApi>(state: &SearchViewState<A>) -> String {
    match state.input_mode {
        InputMode::Edit => String::from("Enter: search | Esc: results | Ctrl-C: quit"),
        InputMode::Results => {
            let mut parts = vec!["/: edit query", "j/k: move"];
            if state.controller.has_prev_page() {
                parts.push("p: prev page");
            }
            if state.controller.has_next_page() {
                parts.push("n: next page");
            }
            parts.push("q: quit");
            parts.join(" | ")
        }
    }
}
