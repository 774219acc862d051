//! Seed data for a fresh session
//!
//! The same seven expenses the collection always starts with, dated relative
//! to today so the list never looks stale.

use chrono::{Duration, Local, NaiveDate};

use crate::models::{CategoryTag, Expense, Money, PersonTag};

fn days_ago(n: i64) -> NaiveDate {
    Local::now().date_naive() - Duration::days(n)
}

/// The initial expense set, newest first
pub fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new(
            Money::from_cents(12050),
            days_ago(0),
            "Grocery shopping",
            PersonTag::Myself,
            CategoryTag::Groceries,
        )
        .with_notes("Weekly grocery run"),
        Expense::new(
            Money::from_cents(4599),
            days_ago(1),
            "Dinner at restaurant",
            PersonTag::Myself,
            CategoryTag::Food,
        ),
        Expense::new(
            Money::from_cents(8999),
            days_ago(1),
            "Electricity bill",
            PersonTag::Dad,
            CategoryTag::Bills,
        )
        .with_notes("Monthly electricity payment"),
        Expense::new(
            Money::from_cents(3450),
            days_ago(2),
            "Earrings",
            PersonTag::Mom,
            CategoryTag::Accessories,
        ),
        Expense::new(
            Money::from_cents(25000),
            days_ago(3),
            "Winter jacket",
            PersonTag::Myself,
            CategoryTag::Shopping,
        ),
        Expense::new(
            Money::from_cents(1575),
            days_ago(3),
            "Medicine",
            PersonTag::Dad,
            CategoryTag::Health,
        ),
        Expense::new(
            Money::from_cents(7500),
            days_ago(4),
            "Internet bill",
            PersonTag::Mom,
            CategoryTag::Bills,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_size_and_order() {
        let expenses = sample_expenses();
        assert_eq!(expenses.len(), 7);
        // Newest first
        for pair in expenses.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_sample_ids_unique() {
        let expenses = sample_expenses();
        for (i, a) in expenses.iter().enumerate() {
            for b in &expenses[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_sample_amounts_non_negative() {
        for e in sample_expenses() {
            assert!(!e.amount.is_negative());
        }
    }
}
