//! Help overlay listing key bindings

use ratatui::{
    layout::Constraint,
    style::{Color, Style},
    widgets::{Block, Borders, Cell, Clear, Row, Table},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

const BINDINGS: &[(&str, &str)] = &[
    ("j / ↓", "Select next expense"),
    ("k / ↑", "Select previous expense"),
    ("a", "Add expense"),
    ("e", "Edit selected expense"),
    ("d", "Delete selected expense"),
    ("f", "Open filter dialog"),
    ("r", "Clear all filters"),
    ("1", "Sort by date"),
    ("2", "Sort by description"),
    ("3", "Sort by amount"),
    ("x", "Export visible expenses to CSV"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

/// Render the help overlay
pub fn render(frame: &mut Frame) {
    let height = BINDINGS.len() as u16 + 2;
    let area = centered_rect_fixed(46, height, frame.area());

    frame.render_widget(Clear, area);

    let rows: Vec<Row> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Row::new(vec![
                Cell::from(*key).style(Style::default().fg(Color::Yellow)),
                Cell::from(*action),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Length(8), Constraint::Min(20)]).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(table, area);
}
