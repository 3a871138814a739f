use crate::calc::Phase;
use crate::ui::theme::{DISPLAY_TEXT, GLOBAL_BORDER, HEADER_SEPARATOR, STATUS_ERROR, STATUS_OK};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, phase: Phase, is_error: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(DISPLAY_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let dot_style = if is_error {
            Style::default().fg(STATUS_ERROR)
        } else {
            Style::default().fg(STATUS_OK)
        };
        let mode = match phase {
            Phase::Accumulating => "input",
            Phase::Resolved => "result",
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", dot_style),
            Span::styled("  ", text_style),
            Span::styled("tenkey", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(mode, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
