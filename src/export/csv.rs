//! CSV export
//!
//! Serializes an expense set to CSV text. The row order is the order given;
//! callers decide what subset and ordering to export. Description and notes
//! carry free text and are quoted, with internal double quotes doubled;
//! empty notes become an empty unquoted field. Amounts are written as plain
//! decimals with no fixed two-decimal padding, preserving the raw numeric
//! value rather than the on-screen `$X.XX` rendering.

use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Expense;

/// Column header row
pub const CSV_HEADER: &str = "Date,Description,Amount,Person,Category,Notes";

/// Render an expense set as CSV text
///
/// Rows are joined with newline; there is no trailing newline.
pub fn render_csv(expenses: &[Expense]) -> String {
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for expense in expenses {
        let notes = if expense.has_notes() {
            quote(&expense.notes)
        } else {
            String::new()
        };

        lines.push(format!(
            "{},{},{},{},{},{}",
            expense.date.format("%Y-%m-%d"),
            quote(&expense.description),
            expense.amount.to_raw_string(),
            expense.person,
            expense.category,
            notes
        ));
    }

    lines.join("\n")
}

/// Write CSV text for an expense set to any writer
pub fn export_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> SpendlogResult<()> {
    writer
        .write_all(render_csv(expenses).as_bytes())
        .map_err(|e| SpendlogError::Export(e.to_string()))
}

/// Write CSV text for an expense set to a file
pub fn write_csv_file(expenses: &[Expense], path: &Path) -> SpendlogResult<()> {
    let mut file = std::fs::File::create(path)?;
    export_csv(expenses, &mut file)
}

/// Default export file name: expenses_YYYY-MM-DD.csv
pub fn default_export_name() -> String {
    format!("expenses_{}.csv", Local::now().format("%Y-%m-%d"))
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}
