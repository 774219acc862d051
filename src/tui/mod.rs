//! Terminal user interface
//!
//! The TUI is split the usual way: `app` holds state, `event` feeds input,
//! `handler` maps keys to state changes, `views` and `dialogs` draw, and
//! `terminal` owns setup, teardown, and the main loop.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::{ActiveDialog, App};
pub use terminal::run_tui;
