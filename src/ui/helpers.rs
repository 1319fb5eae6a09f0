//! Helper functions and constants for UI rendering

use ratatui::{
    style::Style,
    text::Span,
    widgets::{Block, Borders},
};
use unicode_width::UnicodeWidthChar;

use super::theme::{COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_HEADER};

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for the given tick.
pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[(tick_count % SPINNER_FRAMES.len() as u64) as usize]
}

/// Truncate to at most `max_width` terminal columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Chart or panel title, with ` — {category}` when a filter is active.
pub fn titled(base: &str, filter_label: Option<&str>) -> String {
    match filter_label {
        Some(name) => format!(" {} — {} ", base, name),
        None => format!(" {} ", base),
    }
}

/// Bordered panel block; the focused one gets a bright border.
pub fn panel(title: String, focused: bool) -> Block<'static> {
    let border = if focused { COLOR_BORDER_FOCUSED } else { COLOR_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(COLOR_HEADER)))
}
