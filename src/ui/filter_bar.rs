//! Filter controls and question count badge

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::panel;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM};
use crate::app::{App, Focus};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel(" Filter ".to_string(), app.focus == Focus::Filter);

    // Selector and refetch are disabled while a load is in flight
    let control_style = if app.store.is_loading() {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(COLOR_DIM)),
        Span::styled(app.store.selected_category().label().to_string(), control_style),
        Span::styled(" ▶", Style::default().fg(COLOR_DIM)),
        Span::raw("   "),
        Span::styled(format!("[r] Refetch {}", app.refetch_amount), control_style),
        Span::styled("  (+/- amount, a all, q quit)", Style::default().fg(COLOR_DIM)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// "Showing N questions in view."
pub fn render_count_badge(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.store.visible_questions().len();
    let line = Line::from(vec![
        Span::raw(" Showing "),
        Span::styled(
            count.to_string(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" questions in view."),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
