//! Summary panel
//!
//! Shows the filtered total with its timeframe, plus per-person and
//! per-category breakdowns as proportion bars.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{CategoryTag, PersonTag};
use crate::query::ExpenseSummary;
use crate::tui::app::App;

const BAR_WIDTH: usize = 10;

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.summary();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_totals(frame, app, &summary, chunks[0]);
    render_people(frame, &summary, chunks[1]);
    render_categories(frame, &summary, chunks[2]);
}

fn render_totals(frame: &mut Frame, app: &App, summary: &ExpenseSummary, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Total: "),
            Span::styled(
                summary.total().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(app.criteria.timeframe_label()),
        Line::from(""),
    ];

    if !summary.total().is_zero() {
        let (person, amount) = summary.top_person();
        lines.push(Line::from(format!(
            "Top person: {} ({})",
            person.label(),
            amount
        )));
        let (category, amount) = summary.top_category();
        lines.push(Line::from(format!(
            "Top category: {} ({})",
            category.label(),
            amount
        )));
    }

    let block = Block::default().title(" Summary ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_people(frame: &mut Frame, summary: &ExpenseSummary, area: Rect) {
    let lines: Vec<Line> = PersonTag::ALL
        .iter()
        .map(|&tag| bar_line(tag.label(), summary.person(tag).to_string(), summary.person_share(tag)))
        .collect();

    let block = Block::default().title(" By Person ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_categories(frame: &mut Frame, summary: &ExpenseSummary, area: Rect) {
    // Only categories with spending, biggest first; the panel has few rows
    let mut spent: Vec<CategoryTag> = CategoryTag::ALL
        .iter()
        .copied()
        .filter(|&tag| !summary.category(tag).is_zero())
        .collect();
    spent.sort_by_key(|&tag| std::cmp::Reverse(summary.category(tag).cents()));

    let rows = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = spent
        .into_iter()
        .take(rows)
        .map(|tag| {
            bar_line(
                tag.label(),
                summary.category(tag).to_string(),
                summary.category_share(tag),
            )
        })
        .collect();

    let block = Block::default().title(" By Category ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn bar_line(label: &str, amount: String, share: f64) -> Line<'static> {
    let filled = (share * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
    Line::from(vec![
        Span::raw(format!("{:<14} {:>10} ", label, amount)),
        Span::styled(bar, Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {:>3.0}%", share * 100.0)),
    ])
}
