//! Dashboard header
//!
//! Title on the left; load status on the right (spinner while loading,
//! otherwise the time of the last successful load).

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::App;

pub const TITLE: &str = "Trivia — Mini Jet Visualization";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(28)]).areas(inner);

    let title = Line::styled(
        TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(Paragraph::new(title), left);

    frame.render_widget(
        Paragraph::new(status_line(app)).alignment(Alignment::Right),
        right,
    );
}

fn status_line(app: &App) -> Line<'static> {
    if app.store.is_loading() {
        return Line::from(vec![
            Span::styled(spinner_frame(app.tick_count), Style::default().fg(COLOR_ACTIVE)),
            Span::raw(" loading"),
        ]);
    }

    match app.store.last_loaded_at() {
        Some(at) => Line::styled(
            format!("updated {}", at.format("%H:%M:%S")),
            Style::default().fg(COLOR_DIM),
        ),
        None => Line::styled("not loaded", Style::default().fg(COLOR_DIM)),
    }
}
