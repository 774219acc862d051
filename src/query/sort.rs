//! Sort comparator for the expense list
//!
//! Returns a new ordered sequence; the input is never mutated. The underlying
//! `slice::sort_by` is stable, so equal keys keep their relative order in
//! both directions.

use std::cmp::Ordering;

use crate::models::Expense;

/// Column the list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Date,
    Description,
    Amount,
    Person,
    Category,
}

impl SortField {
    /// Column header label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Person => "Person",
            Self::Category => "Category",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// Flip the direction
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Indicator glyph for the active column header
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

fn compare(a: &Expense, b: &Expense, field: SortField) -> Ordering {
    match field {
        SortField::Amount => a.amount.cmp(&b.amount),
        SortField::Date => a.date.cmp(&b.date),
        SortField::Description => a.description.cmp(&b.description),
        SortField::Person => a.person.label().cmp(b.person.label()),
        SortField::Category => a.category.label().cmp(b.category.label()),
    }
}

/// Produce a newly ordered copy of the expenses
pub fn sort_expenses(
    expenses: &[Expense],
    field: SortField,
    direction: SortDirection,
) -> Vec<Expense> {
    let mut sorted = expenses.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| compare(a, b, field)),
        SortDirection::Descending => sorted.sort_by(|a, b| compare(b, a, field)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryTag, Money, PersonTag};
    use chrono::NaiveDate;

    fn expense(amount_cents: i64, date: &str, description: &str) -> Expense {
        Expense::new(
            Money::from_cents(amount_cents),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description,
            PersonTag::Myself,
            CategoryTag::Other,
        )
    }

    #[test]
    fn test_amount_ascending_descending_are_reverses() {
        let expenses = vec![
            expense(300, "2024-01-03", "c"),
            expense(100, "2024-01-01", "a"),
            expense(200, "2024-01-02", "b"),
        ];

        let asc = sort_expenses(&expenses, SortField::Amount, SortDirection::Ascending);
        let desc = sort_expenses(&expenses, SortField::Amount, SortDirection::Descending);

        let asc_amounts: Vec<i64> = asc.iter().map(|e| e.amount.cents()).collect();
        let mut reversed: Vec<i64> = desc.iter().map(|e| e.amount.cents()).collect();
        reversed.reverse();

        assert_eq!(asc_amounts, vec![100, 200, 300]);
        assert_eq!(asc_amounts, reversed);
    }

    #[test]
    fn test_stable_under_ties() {
        let expenses = vec![
            expense(100, "2024-01-01", "first"),
            expense(100, "2024-01-02", "second"),
            expense(100, "2024-01-03", "third"),
        ];

        let asc = sort_expenses(&expenses, SortField::Amount, SortDirection::Ascending);
        let order: Vec<&str> = asc.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);

        let desc = sort_expenses(&expenses, SortField::Amount, SortDirection::Descending);
        let order: Vec<&str> = desc.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_date_calendar_ordering() {
        let expenses = vec![
            expense(1, "2024-02-01", "feb"),
            expense(2, "2024-01-15", "mid jan"),
            expense(3, "2023-12-31", "dec"),
        ];

        let asc = sort_expenses(&expenses, SortField::Date, SortDirection::Ascending);
        let order: Vec<&str> = asc.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, vec!["dec", "mid jan", "feb"]);
    }

    #[test]
    fn test_description_lexicographic() {
        let expenses = vec![
            expense(1, "2024-01-01", "banana"),
            expense(2, "2024-01-01", "apple"),
            expense(3, "2024-01-01", "cherry"),
        ];

        let asc = sort_expenses(&expenses, SortField::Description, SortDirection::Ascending);
        let order: Vec<&str> = asc.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(order, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let expenses = vec![expense(200, "2024-01-02", "b"), expense(100, "2024-01-01", "a")];
        let _ = sort_expenses(&expenses, SortField::Amount, SortDirection::Ascending);
        assert_eq!(expenses[0].amount.cents(), 200);
    }

    #[test]
    fn test_direction_toggle() {
        assert_eq!(
            SortDirection::Ascending.toggled(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.toggled(),
            SortDirection::Ascending
        );
    }
}
