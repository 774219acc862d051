//! Modal dialogs drawn over the main view

pub mod confirm;
pub mod expense_form;
pub mod filter;
pub mod help;

pub use expense_form::{ExpenseField, ExpenseFormState};
pub use filter::{FilterField, FilterFormState};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::widgets::TextInput;

/// Render a labeled text field with an inline cursor when focused
pub(crate) fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &TextInput,
    focused: bool,
) {
    let marker = if focused { "> " } else { "  " };
    let mut spans = vec![Span::styled(
        format!("{}{}: ", marker, label),
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        },
    )];

    if input.content.is_empty() && !focused {
        spans.push(Span::styled(
            input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    } else if focused {
        let (before, after) = input.content.split_at(input.cursor);
        spans.push(Span::raw(before.to_string()));
        let (under, rest) = match after.chars().next() {
            Some(c) => (c.to_string(), &after[c.len_utf8()..]),
            None => (" ".to_string(), after),
        };
        spans.push(Span::styled(
            under,
            Style::default().bg(Color::White).fg(Color::Black),
        ));
        spans.push(Span::raw(rest.to_string()));
    } else {
        spans.push(Span::raw(input.content.clone()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
