//! Export module for spendlog
//!
//! CSV is the only export format: the visible expense set serialized to
//! spreadsheet-compatible text, plus the file-writing collaborator the TUI
//! hands it to.

pub mod csv;

pub use csv::{default_export_name, export_csv, render_csv, write_csv_file, CSV_HEADER};
