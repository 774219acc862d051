//! Screen layout helpers

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The main screen regions, top to bottom
pub struct AppLayout {
    /// Summary panel
    pub summary: Rect,
    /// One-line filter readout
    pub filter_bar: Rect,
    /// Expense table
    pub list: Rect,
    /// Status line
    pub status_bar: Rect,
}

impl AppLayout {
    /// Split the terminal area into the main regions
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            summary: chunks[0],
            filter_bar: chunks[1],
            list: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Center a rect of `percent_x` by `percent_y` percent inside `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Center a fixed-size rect inside `area`, shrinking to fit
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.summary.height, 8);
        assert_eq!(layout.filter_bar.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(
            layout.summary.height
                + layout.filter_bar.height
                + layout.list.height
                + layout.status_bar.height,
            24
        );
    }

    #[test]
    fn test_centered_rect_fixed_shrinks() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(60, 20, area);
        assert!(rect.width <= 40);
        assert!(rect.height <= 10);
    }

    #[test]
    fn test_centered_rect_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, area);
        assert!(rect.x >= area.x && rect.right() <= area.right());
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());
    }
}
