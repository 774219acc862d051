//! Key handling
//!
//! Dialogs take keys first; the main view's bindings only apply when no
//! dialog is open.

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::export::{default_export_name, write_csv_file};
use crate::models::ExpenseId;
use crate::query::SortField;
use crate::store::Command;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::event::Event;

/// Handle a single event
pub fn handle_event(app: &mut App, event: Event) {
    if let Event::Key(key) = event {
        handle_key(app, key);
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog.clone() {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::AddExpense => handle_form_key(app, key, None),
        ActiveDialog::EditExpense(id) => handle_form_key(app, key, Some(id)),
        ActiveDialog::ConfirmDelete(id) => handle_confirm_key(app, key, id),
        ActiveDialog::Filter => handle_filter_key(app, key),
        ActiveDialog::Help => app.close_dialog(),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_index = app.visible().len().saturating_sub(1);
        }
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::AddExpense),
        KeyCode::Char('e') => {
            if let Some(expense) = app.selected_expense() {
                app.open_dialog(ActiveDialog::EditExpense(expense.id));
            }
        }
        KeyCode::Char('d') => {
            if let Some(expense) = app.selected_expense() {
                app.open_dialog(ActiveDialog::ConfirmDelete(expense.id));
            }
        }
        KeyCode::Char('f') => app.open_dialog(ActiveDialog::Filter),
        KeyCode::Char('r') => {
            app.clear_filters();
            app.set_status("Filters cleared");
        }
        KeyCode::Char('1') => app.sort_by(SortField::Date),
        KeyCode::Char('2') => app.sort_by(SortField::Description),
        KeyCode::Char('3') => app.sort_by(SortField::Amount),
        KeyCode::Char('x') => export_visible(app),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }
}

fn export_visible(app: &mut App) {
    let expenses = app.filtered();
    let name = default_export_name();
    match write_csv_file(&expenses, Path::new(&name)) {
        Ok(()) => app.set_status(format!("Exported {} expenses to {}", expenses.len(), name)),
        Err(e) => app.set_status(format!("Export failed: {}", e)),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent, editing: Option<ExpenseId>) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::Down => app.expense_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.focus_prev(),
        KeyCode::Enter => submit_form(app, editing),
        KeyCode::Left => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_left();
            } else {
                app.expense_form.cycle_tag(false);
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_right();
            } else {
                app.expense_form.cycle_tag(true);
            }
        }
        KeyCode::Home => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_start();
            }
        }
        KeyCode::End => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_end();
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.expense_form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(input) = app.expense_form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.expense_form.focused_input() {
                input.insert(c);
            }
        }
        _ => {}
    }
}

fn submit_form(app: &mut App, editing: Option<ExpenseId>) {
    let input = app.expense_form.to_input();
    let (command, done_message) = match editing {
        Some(id) => (Command::Edit(id, input), "Expense updated"),
        None => (Command::Add(input), "Expense added"),
    };

    match app.store.apply(command) {
        Ok(()) => {
            app.close_dialog();
            app.clamp_selection();
            app.set_status(done_message);
        }
        Err(e) => app.expense_form.set_error(e.to_string()),
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent, id: ExpenseId) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            match app.store.apply(Command::Delete(id)) {
                Ok(()) => app.set_status("Expense deleted"),
                Err(e) => app.set_status(e.to_string()),
            }
            app.close_dialog();
            app.clamp_selection();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::Down => app.filter_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.filter_form.focus_prev(),
        KeyCode::Enter => {
            let criteria = app.filter_form.to_criteria();
            let active = criteria.is_active();
            app.apply_criteria(criteria);
            app.close_dialog();
            if active {
                app.set_status(format!("{} expenses match", app.filtered().len()));
            } else {
                app.set_status("Filters cleared");
            }
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.filter_form.reset();
        }
        KeyCode::Char(' ') => {
            if let Some(input) = app.filter_form.focused_input() {
                input.insert(' ');
            } else {
                app.filter_form.toggle_tag();
            }
        }
        KeyCode::Left => {
            if let Some(input) = app.filter_form.focused_input() {
                input.move_left();
            } else {
                app.filter_form.move_cursor(false);
            }
        }
        KeyCode::Right => {
            if let Some(input) = app.filter_form.focused_input() {
                input.move_right();
            } else {
                app.filter_form.move_cursor(true);
            }
        }
        KeyCode::Backspace => {
            if let Some(input) = app.filter_form.focused_input() {
                input.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(input) = app.filter_form.focused_input() {
                input.delete();
            }
        }
        KeyCode::Char(c) => {
            if let Some(input) = app.filter_form.focused_input() {
                input.insert(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ExpenseStore;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_samples() -> App {
        App::new(ExpenseStore::with_sample_data())
    }

    #[test]
    fn test_q_quits() {
        let mut app = app_with_samples();
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_keys() {
        let mut app = app_with_samples();
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.selected_index, 1);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.selected_index, 0);
        handle_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.selected_index, app.visible().len() - 1);
        handle_key(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_add_flow_via_keys() {
        let mut app = App::new(ExpenseStore::new());
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        for c in "45.99".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Tab)); // date, pre-filled
        handle_key(&mut app, key(KeyCode::Tab)); // description
        for c in "Dinner".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.has_dialog());
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.expenses()[0].description, "Dinner");
    }

    #[test]
    fn test_invalid_amount_keeps_dialog_open_with_message() {
        let mut app = App::new(ExpenseStore::new());
        handle_key(&mut app, key(KeyCode::Char('a')));
        for c in "abc".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);
        assert_eq!(
            app.expense_form.error_message.as_deref(),
            Some("Please enter a valid amount")
        );
        assert_eq!(app.store.len(), 0);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = app_with_samples();
        let before = app.store.len();

        handle_key(&mut app, key(KeyCode::Char('d')));
        assert!(matches!(app.active_dialog, ActiveDialog::ConfirmDelete(_)));
        assert_eq!(app.store.len(), before);

        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.store.len(), before);
        assert!(!app.has_dialog());

        handle_key(&mut app, key(KeyCode::Char('d')));
        handle_key(&mut app, key(KeyCode::Char('y')));
        assert_eq!(app.store.len(), before - 1);
    }

    #[test]
    fn test_sort_keys_toggle_direction() {
        let mut app = app_with_samples();
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.sort_field, SortField::Amount);
        let first = app.sort_direction;
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.sort_direction, first.toggled());
    }

    #[test]
    fn test_filter_dialog_space_toggles_tag() {
        let mut app = app_with_samples();
        handle_key(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.active_dialog, ActiveDialog::Filter);

        handle_key(&mut app, key(KeyCode::Tab)); // people row
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.filter_form.person_selected[0]);

        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.criteria.is_active());
    }

    #[test]
    fn test_help_closes_on_any_key() {
        let mut app = app_with_samples();
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        handle_key(&mut app, key(KeyCode::Char('z')));
        assert!(!app.has_dialog());
    }
}
