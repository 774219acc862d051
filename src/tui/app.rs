//! Application state for the TUI

use crate::models::{Expense, ExpenseId};
use crate::query::{
    filter_expenses, sort_expenses, summarize, ExpenseSummary, FilterCriteria, SortDirection,
    SortField,
};
use crate::store::ExpenseStore;
use crate::tui::dialogs::{ExpenseFormState, FilterFormState};

/// Which modal dialog is open, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    EditExpense(ExpenseId),
    ConfirmDelete(ExpenseId),
    Filter,
    Help,
}

/// Top-level application state
pub struct App {
    /// The expense collection
    pub store: ExpenseStore,
    /// Filter criteria currently in effect
    pub criteria: FilterCriteria,
    /// Active sort column
    pub sort_field: SortField,
    /// Active sort direction
    pub sort_direction: SortDirection,
    /// Index of the selected row in the visible list
    pub selected_index: usize,
    /// Currently open dialog
    pub active_dialog: ActiveDialog,
    /// Expense form state while the add/edit dialog is open
    pub expense_form: ExpenseFormState,
    /// Filter form state while the filter dialog is open
    pub filter_form: FilterFormState,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
    /// Set when the user asks to quit
    pub should_quit: bool,
}

impl App {
    /// Create the application around a store
    pub fn new(store: ExpenseStore) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            selected_index: 0,
            active_dialog: ActiveDialog::None,
            expense_form: ExpenseFormState::new(),
            filter_form: FilterFormState::default(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Expenses passing the current filter, in insertion order.
    ///
    /// This is the set the summary describes and the CSV export writes.
    pub fn filtered(&self) -> Vec<Expense> {
        filter_expenses(self.store.expenses(), &self.criteria)
    }

    /// Filtered expenses in display order for the list view
    pub fn visible(&self) -> Vec<Expense> {
        sort_expenses(&self.filtered(), self.sort_field, self.sort_direction)
    }

    /// Summary of the filtered set
    pub fn summary(&self) -> ExpenseSummary {
        summarize(&self.filtered())
    }

    /// The expense under the cursor, if any
    pub fn selected_expense(&self) -> Option<Expense> {
        self.visible().into_iter().nth(self.selected_index)
    }

    /// Move the selection up one row
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move the selection down one row
    pub fn move_down(&mut self) {
        let len = self.visible().len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the visible list after a mutation
    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Apply a sort column: a repeat press flips the direction, a new
    /// column starts descending
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Descending;
        }
    }

    /// Replace the filter criteria and move the cursor back to the top
    pub fn apply_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.selected_index = 0;
    }

    /// Drop all filters
    pub fn clear_filters(&mut self) {
        self.apply_criteria(FilterCriteria::default());
    }

    /// Open a dialog, preparing its form state
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddExpense => self.expense_form = ExpenseFormState::new(),
            ActiveDialog::EditExpense(id) => {
                if let Some(expense) = self.store.get(*id) {
                    self.expense_form = ExpenseFormState::from_expense(expense);
                }
            }
            ActiveDialog::Filter => self.filter_form = FilterFormState::from_criteria(&self.criteria),
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close whatever dialog is open
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Show a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Request shutdown
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
