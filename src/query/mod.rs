//! Pure derived views over the expense collection
//!
//! Filtering, sorting, and aggregation. Each function takes the collection by
//! reference and produces a new value; none of them can fail or touch
//! anything outside their inputs.

pub mod filter;
pub mod sort;
pub mod summary;

pub use filter::{filter_expenses, FilterCriteria};
pub use sort::{sort_expenses, SortDirection, SortField};
pub use summary::{summarize, ExpenseSummary};
