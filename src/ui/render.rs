use crate::calc::ERROR_MARKER;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::keypad::KEYPAD;
use crate::ui::layout::{button_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISPLAY_TEXT, GLOBAL_BORDER, KEY_TEXT, STATUS_ERROR,
};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, display, keypad, footer) = layout_regions(area);

    let calc = app.calc();
    let is_error = calc.buffer == ERROR_MARKER;

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(calc.phase, is_error), header);

    // The display mirrors the buffer verbatim: no truncation or formatting.
    let text_style = if is_error {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(DISPLAY_TEXT)
    };
    let display_widget = Paragraph::new(Line::styled(calc.buffer.clone(), text_style))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(display_widget, display);

    let focus = app.keypad();
    for (row, keys) in KEYPAD.iter().enumerate() {
        for (col, key) in keys.iter().enumerate() {
            let Some(cell) = button_rect(keypad, row, col) else {
                continue;
            };
            let focused = focus.row == row && focus.col == col;
            let (label_style, border_style) = if focused {
                (
                    Style::default().fg(ACCENT).bg(ACTIVE_HIGHLIGHT),
                    Style::default().fg(ACCENT),
                )
            } else {
                (
                    Style::default().fg(KEY_TEXT),
                    Style::default().fg(GLOBAL_BORDER),
                )
            };
            let button = Paragraph::new(Line::styled(key.label, label_style))
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            frame.render_widget(button, cell);
        }
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}
