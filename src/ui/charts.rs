//! Category and difficulty distribution charts

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::{panel, titled, truncate_to_width};
use super::theme::{category_color, COLOR_ACCENT, COLOR_DIFFICULTY_BAR, COLOR_DIM};
use crate::models::Difficulty;
use crate::state::Bucket;

pub const EMPTY_TEXT: &str = "No data for selected filter.";

/// Horizontal bars, one per category, in first-seen order.
pub fn render_category_chart(
    frame: &mut Frame,
    area: Rect,
    buckets: &[Bucket<String>],
    filter_label: Option<&str>,
) {
    let block = panel(titled("Questions by Category", filter_label), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if buckets.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(EMPTY_TEXT, Style::default().fg(COLOR_DIM))),
            inner,
        );
        return;
    }

    let lines = category_bar_lines(buckets, inner.width as usize);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// One line per bucket: `name │████ value`, bars scaled to the largest value.
fn category_bar_lines(buckets: &[Bucket<String>], width: usize) -> Vec<Line<'static>> {
    let max_value = buckets.iter().map(|b| b.value).max().unwrap_or(0).max(1);
    let value_width = max_value.to_string().len();
    let longest_name = buckets.iter().map(|b| b.name.width()).max().unwrap_or(0);
    let label_width = longest_name.min(width / 3).max(1);
    let bar_space = width.saturating_sub(label_width + value_width + 3);

    buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let label = truncate_to_width(&bucket.name, label_width);
            let pad = label_width.saturating_sub(label.width());
            let filled = (bucket.value * bar_space).div_ceil(max_value);

            Line::from(vec![
                Span::styled(
                    format!("{}{} ", " ".repeat(pad), label),
                    Style::default().fg(COLOR_ACCENT),
                ),
                Span::styled("│", Style::default().fg(COLOR_DIM)),
                Span::styled("█".repeat(filled), Style::default().fg(category_color(i))),
                Span::raw(format!(" {}", bucket.value)),
            ])
        })
        .collect()
}

/// Vertical bars for easy, medium and hard.
pub fn render_difficulty_chart(
    frame: &mut Frame,
    area: Rect,
    buckets: &[Bucket<Difficulty>; 3],
    filter_label: Option<&str>,
) {
    let block = panel(titled("Questions by Difficulty", filter_label), false);
    let inner_width = area.width.saturating_sub(2);
    let bar_gap = 2;
    let bar_width = (inner_width.saturating_sub(bar_gap * 2) / 3).clamp(1, 12);

    let bars: Vec<Bar> = buckets
        .iter()
        .map(|bucket| {
            Bar::default()
                .value(bucket.value as u64)
                .label(Line::from(bucket.name.as_str()))
                .style(Style::default().fg(COLOR_DIFFICULTY_BAR))
                .value_style(Style::default().fg(COLOR_ACCENT).bg(COLOR_DIFFICULTY_BAR))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_bar_lengths_scale_to_max() {
        let buckets = vec![
            Bucket::new("History".to_string(), 4),
            Bucket::new("Art".to_string(), 2),
        ];
        let lines = category_bar_lines(&buckets, 41);

        let bar_len = |line: &Line| line.spans[2].content.chars().count();
        assert_eq!(bar_len(&lines[0]), 2 * bar_len(&lines[1]));
        assert!(line_text(&lines[0]).ends_with(" 4"));
        assert!(line_text(&lines[1]).contains("Art"));
    }

    #[test]
    fn test_bar_colors_follow_palette() {
        let buckets: Vec<Bucket<String>> = (0..16)
            .map(|i| Bucket::new(format!("c{i}"), 1))
            .collect();
        let lines = category_bar_lines(&buckets, 30);
        assert_eq!(lines[0].spans[2].style.fg, Some(category_color(0)));
        assert_eq!(lines[14].spans[2].style.fg, lines[0].spans[2].style.fg);
    }

    #[test]
    fn test_empty_category_chart_shows_message() {
        let mut terminal = Terminal::new(TestBackend::new(50, 8)).unwrap();
        terminal
            .draw(|frame| render_category_chart(frame, Rect::new(0, 0, 50, 8), &[], Some("Art")))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains(EMPTY_TEXT));
        assert!(text.contains("Questions by Category — Art"));
    }

    #[test]
    fn test_difficulty_chart_labels() {
        let buckets = [
            Bucket::new(Difficulty::Easy, 3),
            Bucket::new(Difficulty::Medium, 1),
            Bucket::new(Difficulty::Hard, 0),
        ];
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal
            .draw(|frame| render_difficulty_chart(frame, Rect::new(0, 0, 40, 12), &buckets, None))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Questions by Difficulty"));
        assert!(text.contains("easy"));
        assert!(text.contains("medium"));
        assert!(text.contains("hard"));
    }
}
