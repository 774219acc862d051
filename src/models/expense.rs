//! Expense model
//!
//! A single spending record: amount, calendar date, free-text description,
//! one person tag, one category tag, and optional notes. Records are
//! immutable once created except for the full-field replace performed by an
//! edit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::tags::{CategoryTag, PersonTag};

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Non-negative amount
    pub amount: Money,

    /// Calendar date (no time component)
    pub date: NaiveDate,

    /// What the expense was for
    pub description: String,

    /// Which household member incurred it
    pub person: PersonTag,

    /// The type of spending
    pub category: CategoryTag,

    /// Optional free-text notes; empty means absent
    #[serde(default)]
    pub notes: String,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        person: PersonTag,
        category: CategoryTag,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            date,
            description: description.into(),
            person,
            category,
            notes: String::new(),
        }
    }

    /// Attach notes, builder-style
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Whether the expense carries notes
    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Case-insensitive substring match against description or notes
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.description.to_lowercase().contains(&term)
            || self.notes.to_lowercase().contains(&term)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}
