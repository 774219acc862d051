//! Filter evaluator
//!
//! Derives the visible subset of the collection from the active criteria.
//! Every criterion is optional; an unset criterion passes everything, and all
//! set criteria must hold together. The evaluator is total: malformed amount
//! bound strings count as "no bound" rather than an error.

use chrono::NaiveDate;

use crate::models::{CategoryTag, Expense, Money, PersonTag};

/// Transient filter criteria; never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against description and notes
    pub search_term: String,
    /// Allowed person tags; empty means no restriction
    pub person_tags: Vec<PersonTag>,
    /// Allowed category tags; empty means no restriction
    pub category_tags: Vec<CategoryTag>,
    /// Inclusive lower date bound
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub date_to: Option<NaiveDate>,
    /// Inclusive lower amount bound, as entered; unparseable means no bound
    pub min_amount: String,
    /// Inclusive upper amount bound, as entered; unparseable means no bound
    pub max_amount: String,
}

impl FilterCriteria {
    /// Create criteria with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Restrict to the given person tags
    pub fn people(mut self, tags: impl Into<Vec<PersonTag>>) -> Self {
        self.person_tags = tags.into();
        self
    }

    /// Restrict to the given category tags
    pub fn categories(mut self, tags: impl Into<Vec<CategoryTag>>) -> Self {
        self.category_tags = tags.into();
        self
    }

    /// Restrict to dates on or after the given date
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Restrict to dates on or before the given date
    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Set the inclusive minimum amount bound
    pub fn min(mut self, amount: impl Into<String>) -> Self {
        self.min_amount = amount.into();
        self
    }

    /// Set the inclusive maximum amount bound
    pub fn max(mut self, amount: impl Into<String>) -> Self {
        self.max_amount = amount.into();
        self
    }

    /// Whether any criterion is set
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Check a single expense against all criteria
    pub fn matches(&self, expense: &Expense) -> bool {
        if !self.search_term.is_empty() && !expense.matches_search(&self.search_term) {
            return false;
        }

        if !self.person_tags.is_empty() && !self.person_tags.contains(&expense.person) {
            return false;
        }

        if !self.category_tags.is_empty() && !self.category_tags.contains(&expense.category) {
            return false;
        }

        if let Some(from) = self.date_from {
            if expense.date < from {
                return false;
            }
        }

        if let Some(to) = self.date_to {
            if expense.date > to {
                return false;
            }
        }

        if let Some(min) = parse_bound(&self.min_amount) {
            if expense.amount < min {
                return false;
            }
        }

        if let Some(max) = parse_bound(&self.max_amount) {
            if expense.amount > max {
                return false;
            }
        }

        true
    }

    /// Human-readable label for the active date range, for display only
    pub fn timeframe_label(&self) -> String {
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) => {
                format!("{} to {}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d"))
            }
            (Some(from), None) => format!("From {}", from.format("%Y-%m-%d")),
            (None, Some(to)) => format!("Until {}", to.format("%Y-%m-%d")),
            (None, None) => "All time".to_string(),
        }
    }
}

fn parse_bound(s: &str) -> Option<Money> {
    if s.trim().is_empty() {
        return None;
    }
    Money::parse(s).ok()
}

/// Filter a collection, preserving input order
pub fn filter_expenses(expenses: &[Expense], criteria: &FilterCriteria) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect()
}
