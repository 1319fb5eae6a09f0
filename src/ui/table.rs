//! Sample question table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::charts::EMPTY_TEXT;
use super::helpers::{panel, titled, truncate_to_width};
use super::theme::{difficulty_color, COLOR_ACCENT, COLOR_DIM};
use crate::models::{Difficulty, Question};
use crate::state::SAMPLE_SIZE;

const CATEGORY_COLUMN: u16 = 24;

/// First rows of the visible questions: #, category, difficulty, question.
pub fn render(frame: &mut Frame, area: Rect, sample: &[&Question], filter_label: Option<&str>) {
    let title = titled(&format!("Sample (first {} questions)", SAMPLE_SIZE), filter_label);
    let block = panel(title, false);

    if sample.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::styled(EMPTY_TEXT, Style::default().fg(COLOR_DIM))),
            inner,
        );
        return;
    }

    // Borders, the #/difficulty columns and spacing
    let question_width = area.width.saturating_sub(2 + 3 + CATEGORY_COLUMN + 10 + 3) as usize;

    let header = Row::new(["#", "Category", "Difficulty", "Question"]).style(
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = sample
        .iter()
        .enumerate()
        .map(|(i, q)| {
            Row::new(vec![
                Cell::from(Span::styled((i + 1).to_string(), Style::default().fg(COLOR_DIM))),
                Cell::from(truncate_to_width(&q.category, CATEGORY_COLUMN as usize)),
                Cell::from(difficulty_pill(q.difficulty)),
                Cell::from(truncate_to_width(&q.question, question_width)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Length(CATEGORY_COLUMN),
            Constraint::Length(10),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

/// Difficulty rendered as a colored pill.
pub fn difficulty_pill(difficulty: Difficulty) -> Span<'static> {
    Span::styled(
        format!(" {} ", difficulty.as_str()),
        Style::default()
            .fg(Color::Black)
            .bg(difficulty_color(difficulty)),
    )
}
