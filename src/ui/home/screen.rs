//! Body of the home screen: one view per `MarsUiState` variant.

use crate::ui::home::state::MarsUiState;
use crate::ui::layout::centered_rows;
use crate::ui::theme::{HEADER_TEXT, MARS_RED, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const LOADING_TEXT: &str = "Loading...";
pub const LOADING_FAILED_TEXT: &str = "Failed to load";
const RETRY_HINT: &str = "Press R to retry";
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub fn render_home_screen(frame: &mut Frame, area: Rect, state: &MarsUiState, tick: usize) {
    let lines = home_screen_lines(state, tick);
    let rect = centered_rows(area, lines.len() as u16);
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, rect);
}

fn home_screen_lines(state: &MarsUiState, tick: usize) -> Vec<Line<'static>> {
    match state {
        MarsUiState::Loading => vec![
            Line::styled(SPINNER[tick % SPINNER.len()], Style::default().fg(MARS_RED)),
            Line::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)),
        ],
        MarsUiState::Success(photos) => {
            vec![Line::styled(photos.clone(), Style::default().fg(HEADER_TEXT))]
        }
        MarsUiState::Error => vec![
            Line::styled(
                LOADING_FAILED_TEXT,
                Style::default()
                    .fg(STATUS_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::styled(
                RETRY_HINT,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        ],
    }
}
