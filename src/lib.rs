//! spendlog: a terminal expense tracker
//!
//! Expenses live in memory for the length of a session. The library side
//! covers the models, the store and its command interface, filtering,
//! sorting, summarizing, and CSV export; the `tui` module wraps it all in
//! an interactive table with add/edit/delete dialogs.

pub mod error;
pub mod export;
pub mod models;
pub mod query;
pub mod store;
pub mod tui;

pub use error::{SpendlogError, SpendlogResult};
