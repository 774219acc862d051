//! Filter dialog

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{CategoryTag, PersonTag};
use crate::query::FilterCriteria;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::render_field;

/// Fields in the filter form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Search,
    People,
    Categories,
    DateFrom,
    DateTo,
    MinAmount,
    MaxAmount,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::People,
            Self::People => Self::Categories,
            Self::Categories => Self::DateFrom,
            Self::DateFrom => Self::DateTo,
            Self::DateTo => Self::MinAmount,
            Self::MinAmount => Self::MaxAmount,
            Self::MaxAmount => Self::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Search => Self::MaxAmount,
            Self::People => Self::Search,
            Self::Categories => Self::People,
            Self::DateFrom => Self::Categories,
            Self::DateTo => Self::DateFrom,
            Self::MinAmount => Self::DateTo,
            Self::MaxAmount => Self::MinAmount,
        }
    }
}

/// State of the filter dialog
#[derive(Debug, Clone)]
pub struct FilterFormState {
    pub search: TextInput,
    pub date_from: TextInput,
    pub date_to: TextInput,
    pub min_amount: TextInput,
    pub max_amount: TextInput,
    pub person_selected: [bool; PersonTag::COUNT],
    pub category_selected: [bool; CategoryTag::COUNT],
    pub person_cursor: usize,
    pub category_cursor: usize,
    pub focused: FilterField,
}

impl Default for FilterFormState {
    fn default() -> Self {
        Self {
            search: TextInput::new().placeholder("description or notes"),
            date_from: TextInput::new().placeholder("YYYY-MM-DD"),
            date_to: TextInput::new().placeholder("YYYY-MM-DD"),
            min_amount: TextInput::new(),
            max_amount: TextInput::new(),
            person_selected: [false; PersonTag::COUNT],
            category_selected: [false; CategoryTag::COUNT],
            person_cursor: 0,
            category_cursor: 0,
            focused: FilterField::Search,
        }
    }
}

impl FilterFormState {
    /// Build a form pre-filled from the criteria currently in effect
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut form = Self {
            search: TextInput::new().content(criteria.search_term.clone()),
            min_amount: TextInput::new().content(criteria.min_amount.clone()),
            max_amount: TextInput::new().content(criteria.max_amount.clone()),
            ..Self::default()
        };
        if let Some(date) = criteria.date_from {
            form.date_from = TextInput::new().content(date.format("%Y-%m-%d").to_string());
        }
        if let Some(date) = criteria.date_to {
            form.date_to = TextInput::new().content(date.format("%Y-%m-%d").to_string());
        }
        for tag in &criteria.person_tags {
            form.person_selected[tag.index()] = true;
        }
        for tag in &criteria.category_tags {
            form.category_selected[tag.index()] = true;
        }
        form
    }

    /// Convert the form back into filter criteria.
    ///
    /// Date text that does not parse as `YYYY-MM-DD` becomes no bound,
    /// matching how unparseable amount bounds behave.
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search.value().to_string(),
            person_tags: PersonTag::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| self.person_selected[*i])
                .map(|(_, tag)| *tag)
                .collect(),
            category_tags: CategoryTag::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| self.category_selected[*i])
                .map(|(_, tag)| *tag)
                .collect(),
            date_from: parse_date(self.date_from.value()),
            date_to: parse_date(self.date_to.value()),
            min_amount: self.min_amount.value().to_string(),
            max_amount: self.max_amount.value().to_string(),
        }
    }

    /// Clear every field back to the no-filter state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// The text input under focus, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FilterField::Search => Some(&mut self.search),
            FilterField::DateFrom => Some(&mut self.date_from),
            FilterField::DateTo => Some(&mut self.date_to),
            FilterField::MinAmount => Some(&mut self.min_amount),
            FilterField::MaxAmount => Some(&mut self.max_amount),
            FilterField::People | FilterField::Categories => None,
        }
    }

    /// Move the cursor within the focused tag row
    pub fn move_cursor(&mut self, forward: bool) {
        match self.focused {
            FilterField::People => {
                self.person_cursor = step(self.person_cursor, PersonTag::COUNT, forward);
            }
            FilterField::Categories => {
                self.category_cursor = step(self.category_cursor, CategoryTag::COUNT, forward);
            }
            _ => {}
        }
    }

    /// Toggle the tag under the cursor in the focused tag row
    pub fn toggle_tag(&mut self) {
        match self.focused {
            FilterField::People => {
                self.person_selected[self.person_cursor] = !self.person_selected[self.person_cursor];
            }
            FilterField::Categories => {
                self.category_selected[self.category_cursor] =
                    !self.category_selected[self.category_cursor];
            }
            _ => {}
        }
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

fn step(cursor: usize, count: usize, forward: bool) -> usize {
    if forward {
        (cursor + 1) % count
    } else {
        (cursor + count - 1) % count
    }
}

/// Render the filter dialog
pub fn render(frame: &mut Frame, form: &FilterFormState) {
    let area = centered_rect_fixed(64, 18, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Filter Expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // search
            Constraint::Length(2), // people
            Constraint::Length(3), // categories (wraps to two lines)
            Constraint::Length(2), // date from
            Constraint::Length(2), // date to
            Constraint::Length(2), // min amount
            Constraint::Length(2), // max amount
            Constraint::Length(1), // hints
        ])
        .split(inner);

    render_field(
        frame,
        chunks[0],
        "Search",
        &form.search,
        form.focused == FilterField::Search,
    );
    render_tag_row(
        frame,
        chunks[1],
        "People",
        PersonTag::ALL.iter().map(|t| t.label()),
        &form.person_selected,
        form.person_cursor,
        form.focused == FilterField::People,
    );
    render_tag_row(
        frame,
        chunks[2],
        "Categories",
        CategoryTag::ALL.iter().map(|t| t.label()),
        &form.category_selected,
        form.category_cursor,
        form.focused == FilterField::Categories,
    );
    render_field(
        frame,
        chunks[3],
        "From date",
        &form.date_from,
        form.focused == FilterField::DateFrom,
    );
    render_field(
        frame,
        chunks[4],
        "To date",
        &form.date_to,
        form.focused == FilterField::DateTo,
    );
    render_field(
        frame,
        chunks[5],
        "Min amount",
        &form.min_amount,
        form.focused == FilterField::MinAmount,
    );
    render_field(
        frame,
        chunks[6],
        "Max amount",
        &form.max_amount,
        form.focused == FilterField::MaxAmount,
    );

    let hints =
        Paragraph::new("Tab: next field | Space: toggle tag | Enter: apply | Ctrl+r: clear | Esc: cancel")
            .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[7]);
}

/// Render a row of toggleable tags as `[x] label` cells
fn render_tag_row<'a>(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    labels: impl Iterator<Item = &'a str>,
    selected: &[bool],
    cursor: usize,
    focused: bool,
) {
    let marker = if focused { "> " } else { "  " };
    let mut spans = vec![Span::raw(format!("{}{}: ", marker, label))];
    for (i, tag_label) in labels.enumerate() {
        let mark = if selected[i] { "x" } else { " " };
        let cell = format!("[{}] {} ", mark, tag_label);
        let style = if focused && i == cursor {
            Style::default().fg(Color::Yellow)
        } else if selected[i] {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        spans.push(Span::styled(cell, style));
    }
    let paragraph = Paragraph::new(Line::from(spans)).wrap(ratatui::widgets::Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
