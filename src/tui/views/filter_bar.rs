//! One-line readout of the filters in effect

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::query::FilterCriteria;
use crate::tui::app::App;

/// Render the filter bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Filters ").borders(Borders::ALL);

    let (text, style) = if app.criteria.is_active() {
        (describe(&app.criteria), Style::default().fg(Color::Yellow))
    } else {
        (
            "none (press f to filter)".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(text).style(style).block(block), area);
}

fn describe(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();

    if !criteria.search_term.trim().is_empty() {
        parts.push(format!("search \"{}\"", criteria.search_term.trim()));
    }
    if !criteria.person_tags.is_empty() {
        let labels: Vec<&str> = criteria.person_tags.iter().map(|t| t.label()).collect();
        parts.push(format!("people: {}", labels.join(", ")));
    }
    if !criteria.category_tags.is_empty() {
        let labels: Vec<&str> = criteria.category_tags.iter().map(|t| t.label()).collect();
        parts.push(format!("categories: {}", labels.join(", ")));
    }
    match (criteria.date_from, criteria.date_to) {
        (None, None) => {}
        _ => parts.push(criteria.timeframe_label()),
    }
    if !criteria.min_amount.trim().is_empty() {
        parts.push(format!("min {}", criteria.min_amount.trim()));
    }
    if !criteria.max_amount.trim().is_empty() {
        parts.push(format!("max {}", criteria.max_amount.trim()));
    }

    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonTag;
    use chrono::NaiveDate;

    #[test]
    fn test_describe_joins_active_parts() {
        let criteria = FilterCriteria::new()
            .search("bill")
            .people(vec![PersonTag::Dad])
            .from_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .min("10");
        let text = describe(&criteria);
        assert!(text.contains("search \"bill\""));
        assert!(text.contains("people: dad"));
        assert!(text.contains("min 10"));
    }
}
