//! Expense table view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::Expense;
use crate::query::SortField;
use crate::tui::app::App;

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible();
    let total = app.store.len();

    let title = format!(" Expenses ({} of {}) ", visible.len(), total);
    let block = Block::default().title(title).borders(Borders::ALL);

    if visible.is_empty() {
        let message = if app.criteria.is_active() {
            "No expenses match the current filters. Press r to clear them."
        } else {
            "No expenses yet. Press a to add one."
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        header_cell("Date", SortField::Date, app),
        header_cell("Description", SortField::Description, app),
        header_cell("Amount", SortField::Amount, app),
        Cell::from("Person"),
        Cell::from("Category"),
        Cell::from("Notes"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD))
    .height(1);

    let rows: Vec<Row> = visible.iter().map(expense_row).collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(14),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut state);
}

fn header_cell<'a>(label: &'a str, field: SortField, app: &App) -> Cell<'a> {
    if app.sort_field == field {
        Cell::from(format!("{} {}", label, app.sort_direction.indicator()))
            .style(Style::default().fg(Color::Cyan))
    } else {
        Cell::from(label)
    }
}

fn expense_row(expense: &Expense) -> Row<'static> {
    Row::new(vec![
        Cell::from(expense.date.format("%Y-%m-%d").to_string()),
        Cell::from(truncate(&expense.description, 40)),
        Cell::from(expense.amount.to_string()).style(Style::default().fg(Color::Green)),
        Cell::from(expense.person.label().to_string()),
        Cell::from(expense.category.label().to_string()),
        Cell::from(truncate(&expense.notes, 30)).style(Style::default().fg(Color::DarkGray)),
    ])
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
