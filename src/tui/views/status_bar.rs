//! Status line at the bottom of the screen

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str = "a:add e:edit d:delete f:filter x:export ?:help q:quit";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let left = match &app.status_message {
        Some(message) => message.clone(),
        None => format!("{} expenses", app.store.len()),
    };

    let width = area.width as usize;
    let padding = width
        .saturating_sub(left.chars().count())
        .saturating_sub(HINTS.len());

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(padding)),
        Span::styled(HINTS, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Black)),
        area,
    );
}
