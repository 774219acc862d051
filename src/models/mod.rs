//! Core data models for spendlog
//!
//! The expense record itself plus its building blocks: the typed id, the
//! cent-precise amount, and the two closed tag enumerations.

pub mod expense;
pub mod ids;
pub mod money;
pub mod tags;

pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
pub use tags::{CategoryTag, PersonTag};
