//! Loading and error states for the content area

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_ERROR};

pub const LOADING_TEXT: &str = "Loading data…";

/// Centered "Loading data…" message
pub fn render_loading(frame: &mut Frame, area: Rect) {
    let line = Line::styled(LOADING_TEXT, Style::default().fg(COLOR_DIM));
    render_centered(frame, area, Text::from(line), 1);
}

/// Centered error message in red, with a dimmed recovery hint below
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, hint: &str) {
    let text = Text::from(vec![
        Line::styled(
            message.to_string(),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::styled(hint.to_string(), Style::default().fg(COLOR_DIM)),
    ]);
    render_centered(frame, area, text, 3);
}

fn render_centered(frame: &mut Frame, area: Rect, text: Text<'_>, text_height: u16) {
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let y_offset = area.height.saturating_sub(text_height) / 2;
    let height = text_height.min(area.height);
    let centered_area = Rect::new(area.x, area.y + y_offset, area.width, height);

    frame.render_widget(paragraph, centered_area);
}
