//! Main view rendering

pub mod expense_list;
pub mod filter_bar;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use crate::tui::app::{ActiveDialog, App};
use crate::tui::dialogs;
use crate::tui::layout::AppLayout;

/// Render the whole screen, including any open dialog
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    summary::render(frame, app, layout.summary);
    filter_bar::render(frame, app, layout.filter_bar);
    expense_list::render(frame, app, layout.list);
    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::AddExpense => dialogs::expense_form::render(frame, &app.expense_form, false),
        ActiveDialog::EditExpense(_) => {
            dialogs::expense_form::render(frame, &app.expense_form, true)
        }
        ActiveDialog::ConfirmDelete(id) => {
            let message = match app.store.get(*id) {
                Some(expense) => format!(
                    "Delete \"{}\" ({})? This cannot be undone.",
                    expense.description, expense.amount
                ),
                None => "Delete this expense? This cannot be undone.".to_string(),
            };
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::Filter => dialogs::filter::render(frame, &app.filter_form),
        ActiveDialog::Help => dialogs::help::render(frame),
    }
}
