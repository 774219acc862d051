//! spendlog entry point

use anyhow::Result;
use clap::Parser;

use spendlog::store::ExpenseStore;
use spendlog::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Track personal expenses in your terminal",
    long_about = "An interactive expense tracker. Expenses are kept in memory \
for the session; use the export key to write the visible set to a CSV file."
)]
struct Cli {
    /// Start with an empty expense list instead of the sample data
    #[arg(long)]
    empty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = if cli.empty {
        ExpenseStore::new()
    } else {
        ExpenseStore::with_sample_data()
    };

    run_tui(store)?;
    Ok(())
}
