//! Expense add/edit form dialog

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{CategoryTag, Expense, PersonTag};
use crate::store::ExpenseInput;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

use super::render_field;

/// Fields in the expense form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseField {
    Amount,
    Date,
    Description,
    Person,
    Category,
    Notes,
}

impl ExpenseField {
    /// Next field in tab order, wrapping
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
            Self::Description => Self::Person,
            Self::Person => Self::Category,
            Self::Category => Self::Notes,
            Self::Notes => Self::Amount,
        }
    }

    /// Previous field in tab order, wrapping
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Notes,
            Self::Date => Self::Amount,
            Self::Description => Self::Date,
            Self::Person => Self::Description,
            Self::Category => Self::Person,
            Self::Notes => Self::Category,
        }
    }
}

/// State of the expense add/edit form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub amount: TextInput,
    pub date: TextInput,
    pub description: TextInput,
    pub notes: TextInput,
    pub person: PersonTag,
    pub category: CategoryTag,
    pub focused: ExpenseField,
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create an empty form with today's date pre-filled
    pub fn new() -> Self {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        Self {
            amount: TextInput::new().placeholder("0.00"),
            date: TextInput::new().content(today),
            description: TextInput::new().placeholder("What was this for?"),
            notes: TextInput::new().placeholder("Optional"),
            person: PersonTag::default(),
            category: CategoryTag::default(),
            focused: ExpenseField::Amount,
            error_message: None,
        }
    }

    /// Create a form pre-filled from an existing expense
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            amount: TextInput::new().content(expense.amount.to_raw_string()),
            date: TextInput::new().content(expense.date.format("%Y-%m-%d").to_string()),
            description: TextInput::new().content(expense.description.clone()),
            notes: TextInput::new().content(expense.notes.clone()),
            person: expense.person,
            category: expense.category,
            focused: ExpenseField::Amount,
            error_message: None,
        }
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// The text input under focus, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            ExpenseField::Amount => Some(&mut self.amount),
            ExpenseField::Date => Some(&mut self.date),
            ExpenseField::Description => Some(&mut self.description),
            ExpenseField::Notes => Some(&mut self.notes),
            ExpenseField::Person | ExpenseField::Category => None,
        }
    }

    /// Cycle the focused tag field forward or backward
    pub fn cycle_tag(&mut self, forward: bool) {
        match self.focused {
            ExpenseField::Person => {
                self.person = if forward {
                    self.person.next()
                } else {
                    self.person.prev()
                };
            }
            ExpenseField::Category => {
                self.category = if forward {
                    self.category.next()
                } else {
                    self.category.prev()
                };
            }
            _ => {}
        }
    }

    /// Record a validation error to show under the form
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Build the input the store validates and applies
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput {
            amount: self.amount.value().to_string(),
            date: self.date.value().to_string(),
            description: self.description.value().to_string(),
            person: self.person,
            category: self.category,
            notes: self.notes.value().to_string(),
        }
    }
}

/// Render the expense form dialog
pub fn render(frame: &mut Frame, form: &ExpenseFormState, editing: bool) {
    let title = if editing {
        " Edit Expense "
    } else {
        " Add Expense "
    };
    let area = centered_rect_fixed(54, 17, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // amount
            Constraint::Length(2), // date
            Constraint::Length(2), // description
            Constraint::Length(2), // person
            Constraint::Length(2), // category
            Constraint::Length(2), // notes
            Constraint::Length(1), // error
            Constraint::Length(1), // hints
        ])
        .split(inner);

    render_field(
        frame,
        chunks[0],
        "Amount",
        &form.amount,
        form.focused == ExpenseField::Amount,
    );
    render_field(
        frame,
        chunks[1],
        "Date",
        &form.date,
        form.focused == ExpenseField::Date,
    );
    render_field(
        frame,
        chunks[2],
        "Description",
        &form.description,
        form.focused == ExpenseField::Description,
    );
    render_tag_field(
        frame,
        chunks[3],
        "Person",
        form.person.label(),
        form.focused == ExpenseField::Person,
    );
    render_tag_field(
        frame,
        chunks[4],
        "Category",
        form.category.label(),
        form.focused == ExpenseField::Category,
    );
    render_field(
        frame,
        chunks[5],
        "Notes",
        &form.notes,
        form.focused == ExpenseField::Notes,
    );

    if let Some(ref message) = form.error_message {
        let error = Paragraph::new(Line::from(message.as_str()))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(error, chunks[6]);
    }

    let hints = Paragraph::new("Tab: next field | ←/→: change tag | Enter: save | Esc: cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, chunks[7]);
}

/// Render a tag selector shown as `◀ value ▶` when focused
fn render_tag_field(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    label: &str,
    value: &str,
    focused: bool,
) {
    let (marker, style) = if focused {
        ("> ", Style::default().fg(Color::Yellow))
    } else {
        ("  ", Style::default())
    };
    let shown = if focused {
        format!("{}{}: ◀ {} ▶", marker, label, value)
    } else {
        format!("{}{}: {}", marker, label, value)
    };
    frame.render_widget(Paragraph::new(shown).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::{ExpenseId, Money};

    #[test]
    fn test_field_order_wraps() {
        let mut field = ExpenseField::Amount;
        for _ in 0..6 {
            field = field.next();
        }
        assert_eq!(field, ExpenseField::Amount);
        assert_eq!(ExpenseField::Amount.prev(), ExpenseField::Notes);
    }

    #[test]
    fn test_new_form_prefills_today() {
        let form = ExpenseFormState::new();
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(form.date.value(), today);
        assert_eq!(form.amount.value(), "");
        assert_eq!(form.person, PersonTag::Myself);
    }

    #[test]
    fn test_from_expense_uses_raw_amount() {
        let expense = Expense {
            id: ExpenseId::new(),
            amount: Money::from_cents(12050),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            description: "Grocery shopping".to_string(),
            person: PersonTag::Myself,
            category: CategoryTag::Groceries,
            notes: String::new(),
        };
        let form = ExpenseFormState::from_expense(&expense);
        assert_eq!(form.amount.value(), "120.5");
        assert_eq!(form.date.value(), "2024-01-05");
        assert_eq!(form.category, CategoryTag::Groceries);
    }

    #[test]
    fn test_cycle_tag_only_on_tag_fields() {
        let mut form = ExpenseFormState::new();
        form.cycle_tag(true);
        assert_eq!(form.person, PersonTag::Myself);

        form.focused = ExpenseField::Person;
        form.cycle_tag(true);
        assert_eq!(form.person, PersonTag::Mom);
        form.cycle_tag(false);
        assert_eq!(form.person, PersonTag::Myself);
    }

    #[test]
    fn test_to_input_carries_all_fields() {
        let mut form = ExpenseFormState::new();
        form.amount = TextInput::new().content("45.99");
        form.description = TextInput::new().content("Dinner");
        form.category = CategoryTag::Food;
        let input = form.to_input();
        assert_eq!(input.amount, "45.99");
        assert_eq!(input.description, "Dinner");
        assert_eq!(input.category, CategoryTag::Food);
    }
}
