use crate::ui::home::MarsUiState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_TEXT, MARS_RED, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const APP_TITLE: &str = "Mars Photos";

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &MarsUiState) -> Paragraph<'static> {
        let (dot_color, status) = match state {
            MarsUiState::Loading => (STATUS_PENDING, "loading"),
            MarsUiState::Success(_) => (STATUS_OK, "ok"),
            MarsUiState::Error => (STATUS_ERROR, "error"),
        };
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled("●", Style::default().fg(dot_color)),
            Span::raw("  "),
            Span::styled(
                APP_TITLE,
                Style::default().fg(MARS_RED).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  │  {status}"), Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
