//! Summary aggregator
//!
//! Single linear pass over a (typically filtered) expense set producing the
//! grand total plus per-person and per-category totals. The buckets are
//! fixed-size arrays indexed by the tag enums, initialized exhaustively, so
//! every tag always has an entry and zero-match tags read as zero.

use crate::models::{CategoryTag, Expense, Money, PersonTag};

/// Aggregate totals over an expense set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseSummary {
    total: Money,
    by_person: [Money; PersonTag::COUNT],
    by_category: [Money; CategoryTag::COUNT],
}

impl ExpenseSummary {
    /// Summary with every bucket at zero
    pub fn empty() -> Self {
        Self {
            total: Money::zero(),
            by_person: [Money::zero(); PersonTag::COUNT],
            by_category: [Money::zero(); CategoryTag::COUNT],
        }
    }

    /// Sum of all amounts in the set
    pub fn total(&self) -> Money {
        self.total
    }

    /// Total for one person tag
    pub fn person(&self, tag: PersonTag) -> Money {
        self.by_person[tag.index()]
    }

    /// Total for one category tag
    pub fn category(&self, tag: CategoryTag) -> Money {
        self.by_category[tag.index()]
    }

    /// Fraction of the total attributed to a person tag, in [0, 1]
    ///
    /// A zero total yields 0.0, never NaN.
    pub fn person_share(&self, tag: PersonTag) -> f64 {
        share(self.person(tag), self.total)
    }

    /// Fraction of the total attributed to a category tag, in [0, 1]
    pub fn category_share(&self, tag: CategoryTag) -> f64 {
        share(self.category(tag), self.total)
    }

    /// The person tag with the highest total
    pub fn top_person(&self) -> (PersonTag, Money) {
        PersonTag::ALL
            .into_iter()
            .map(|t| (t, self.person(t)))
            .max_by_key(|(_, amount)| *amount)
            .unwrap_or((PersonTag::Myself, Money::zero()))
    }

    /// The category tag with the highest total
    pub fn top_category(&self) -> (CategoryTag, Money) {
        CategoryTag::ALL
            .into_iter()
            .map(|t| (t, self.category(t)))
            .max_by_key(|(_, amount)| *amount)
            .unwrap_or((CategoryTag::Other, Money::zero()))
    }
}

fn share(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        part.cents() as f64 / total.cents() as f64
    }
}

/// Aggregate an expense set in one pass
pub fn summarize(expenses: &[Expense]) -> ExpenseSummary {
    let mut summary = ExpenseSummary::empty();
    for expense in expenses {
        summary.total += expense.amount;
        summary.by_person[expense.person.index()] += expense.amount;
        summary.by_category[expense.category.index()] += expense.amount;
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(amount_cents: i64, person: PersonTag, category: CategoryTag) -> Expense {
        Expense::new(
            Money::from_cents(amount_cents),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            "test",
            person,
            category,
        )
    }

    #[test]
    fn test_empty_set_all_buckets_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total(), Money::zero());
        for tag in PersonTag::ALL {
            assert_eq!(summary.person(tag), Money::zero());
        }
        for tag in CategoryTag::ALL {
            assert_eq!(summary.category(tag), Money::zero());
        }
    }

    #[test]
    fn test_total_is_exact_sum() {
        let expenses = vec![
            expense(12050, PersonTag::Myself, CategoryTag::Groceries),
            expense(4599, PersonTag::Mom, CategoryTag::Food),
            expense(1, PersonTag::Dad, CategoryTag::Other),
        ];
        let summary = summarize(&expenses);
        assert_eq!(summary.total(), Money::from_cents(16650));
    }

    #[test]
    fn test_bucket_accumulation() {
        let expenses = vec![
            expense(10000, PersonTag::Myself, CategoryTag::Food),
            expense(5000, PersonTag::Myself, CategoryTag::Bills),
            expense(2500, PersonTag::Mom, CategoryTag::Bills),
        ];
        let summary = summarize(&expenses);
        assert_eq!(summary.person(PersonTag::Myself), Money::from_cents(15000));
        assert_eq!(summary.person(PersonTag::Mom), Money::from_cents(2500));
        assert_eq!(summary.person(PersonTag::Dad), Money::zero());
        assert_eq!(summary.category(CategoryTag::Bills), Money::from_cents(7500));
        assert_eq!(summary.category(CategoryTag::Food), Money::from_cents(10000));
        assert_eq!(summary.category(CategoryTag::Health), Money::zero());
    }

    #[test]
    fn test_filtered_scenario() {
        use crate::query::filter::{filter_expenses, FilterCriteria};

        let expenses = vec![
            expense(10000, PersonTag::Myself, CategoryTag::Food),
            expense(5000, PersonTag::Mom, CategoryTag::Bills),
        ];
        let filtered = filter_expenses(&expenses, &FilterCriteria::new().min("60"));
        let summary = summarize(&filtered);

        assert_eq!(summary.total(), Money::from_cents(10000));
        assert_eq!(summary.person(PersonTag::Myself), Money::from_cents(10000));
        assert_eq!(summary.person(PersonTag::Mom), Money::zero());
        assert_eq!(summary.person(PersonTag::Dad), Money::zero());
        assert_eq!(summary.person(PersonTag::Other), Money::zero());
    }

    #[test]
    fn test_zero_total_share_is_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.person_share(PersonTag::Myself), 0.0);
        assert_eq!(summary.category_share(CategoryTag::Food), 0.0);
    }

    #[test]
    fn test_shares() {
        let expenses = vec![
            expense(7500, PersonTag::Myself, CategoryTag::Food),
            expense(2500, PersonTag::Mom, CategoryTag::Bills),
        ];
        let summary = summarize(&expenses);
        assert!((summary.person_share(PersonTag::Myself) - 0.75).abs() < f64::EPSILON);
        assert!((summary.person_share(PersonTag::Mom) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_top_buckets() {
        let expenses = vec![
            expense(7500, PersonTag::Dad, CategoryTag::Health),
            expense(2500, PersonTag::Mom, CategoryTag::Bills),
        ];
        let summary = summarize(&expenses);
        assert_eq!(summary.top_person(), (PersonTag::Dad, Money::from_cents(7500)));
        assert_eq!(
            summary.top_category(),
            (CategoryTag::Health, Money::from_cents(7500))
        );
    }
}
