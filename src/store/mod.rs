//! In-memory expense store
//!
//! The single owner of the expense collection. Every mutation goes through
//! [`ExpenseStore::apply`] with a [`Command`], and a command either applies in
//! full or is rejected with a validation error and no state change. There is
//! no persistence: the collection lives for the session only.

pub mod sample;

use chrono::NaiveDate;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{CategoryTag, Expense, ExpenseId, Money, PersonTag};

/// Raw form input for creating or replacing an expense
///
/// Amount and date arrive as the strings the user typed; validation parses
/// them and reports the first failing rule in the fixed order
/// amount, description, date.
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub date: String,
    pub description: String,
    pub person: PersonTag,
    pub category: CategoryTag,
    pub notes: String,
}

impl ExpenseInput {
    /// Parse and validate the input, producing the typed fields
    ///
    /// Checks run in priority order and stop at the first failure so the user
    /// sees a single message: amount (present, numeric, non-negative), then
    /// description (non-empty), then date (present, valid calendar date).
    fn parse(&self) -> SpendlogResult<(Money, String, NaiveDate)> {
        let amount =
            Money::parse(&self.amount).map_err(|_| SpendlogError::InvalidAmount)?;
        if amount.is_negative() {
            return Err(SpendlogError::InvalidAmount);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(SpendlogError::MissingDescription);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| SpendlogError::MissingDate)?;

        Ok((amount, description.to_string(), date))
    }

    /// Validate without building
    pub fn validate(&self) -> SpendlogResult<()> {
        self.parse().map(|_| ())
    }

    /// Build an expense carrying the given id
    pub fn build(&self, id: ExpenseId) -> SpendlogResult<Expense> {
        let (amount, description, date) = self.parse()?;
        Ok(Expense {
            id,
            amount,
            date,
            description,
            person: self.person,
            category: self.category,
            notes: self.notes.trim().to_string(),
        })
    }
}

/// A state-changing operation on the store
#[derive(Debug, Clone)]
pub enum Command {
    /// Append a new expense built from the input
    Add(ExpenseInput),
    /// Replace every field of the expense with the given id
    Edit(ExpenseId, ExpenseInput),
    /// Remove the expense with the given id
    Delete(ExpenseId),
}

/// Owner of the in-memory expense collection
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with the sample data set
    pub fn with_sample_data() -> Self {
        Self {
            expenses: sample::sample_expenses(),
        }
    }

    /// The current collection, newest entries first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses held
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the store holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Apply a command atomically
    ///
    /// On `Err` the collection is untouched. `Add` prepends so the newest
    /// expense appears first in the unsorted view.
    pub fn apply(&mut self, command: Command) -> SpendlogResult<()> {
        match command {
            Command::Add(input) => {
                let expense = input.build(ExpenseId::new())?;
                self.expenses.insert(0, expense);
                Ok(())
            }
            Command::Edit(id, input) => {
                let expense = input.build(id)?;
                let slot = self
                    .expenses
                    .iter_mut()
                    .find(|e| e.id == id)
                    .ok_or_else(|| SpendlogError::NotFound(id.to_string()))?;
                *slot = expense;
                Ok(())
            }
            Command::Delete(id) => {
                let before = self.expenses.len();
                self.expenses.retain(|e| e.id != id);
                if self.expenses.len() == before {
                    return Err(SpendlogError::NotFound(id.to_string()));
                }
                Ok(())
            }
        }
    }
}
