//! Category navigation sidebar
//!
//! Lists every fetched category with how many visible questions fall in it.
//! The highlighted row follows ↑/↓; the selected filter is drawn in green.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{panel, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_DIM, COLOR_HIGHLIGHT_BG};
use crate::app::{App, Focus};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel(" Categories ".to_string(), app.focus == Focus::Sidebar);
    let inner_width = area.width.saturating_sub(2) as usize;
    let selected = app.store.selected_category();

    let entries = app.sidebar_entries();
    if entries.is_empty() {
        let hint = Line::styled(
            if app.store.is_loading() { "…" } else { "No categories" },
            Style::default().fg(COLOR_DIM),
        );
        frame.render_widget(List::new(vec![ListItem::new(hint)]).block(block), area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|(category, count)| {
            let count_text = count.to_string();
            let name_width = inner_width.saturating_sub(count_text.width() + 1);
            let name = truncate_to_width(&category.name, name_width);
            let pad = inner_width.saturating_sub(name.width() + count_text.width());

            let name_style = if selected.as_str() == category.name {
                Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_ACCENT)
            };

            ListItem::new(Line::from(vec![
                Span::styled(name, name_style),
                Span::raw(" ".repeat(pad)),
                Span::styled(count_text, Style::default().fg(COLOR_DIM)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_HIGHLIGHT_BG));

    let mut state = ListState::default().with_selected(Some(app.sidebar_index));
    frame.render_stateful_widget(list, area, &mut state);
}
