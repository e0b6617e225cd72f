use crate::ui::home::MarsUiState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// Bottom bar: key hints on the left, crate version on the right.
pub struct Footer<'a> {
    state: &'a MarsUiState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a MarsUiState) -> Self {
        Self { state }
    }

    /// Keys that do something in the current state, as `(key, action)`.
    ///
    /// Retry is left out while a fetch is in flight.
    pub fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = Vec::with_capacity(2);
        if !self.state.is_loading() {
            hints.push(("R", "Retry"));
        }
        hints.push(("Q", "Quit"));
        hints
    }

    fn hints_line(&self) -> Line<'static> {
        let key_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.key_hints().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, label_style));
            }
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(": {action}"), label_style));
        }
        Line::from(spans)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        // Version first so the hints win if the bar is too narrow for both.
        Paragraph::new(format!("v{VERSION} "))
            .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM))
            .alignment(Alignment::Right)
            .render(inner, buf);
        let hints = self.hints_line();
        let hints_area = Rect {
            width: inner.width.min(hints.width() as u16),
            ..inner
        };
        Paragraph::new(hints).render(hints_area, buf);
    }
}
