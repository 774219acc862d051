//! Terminal setup and the main loop

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::SpendlogResult;
use crate::store::ExpenseStore;
use crate::tui::app::App;
use crate::tui::event::EventHandler;
use crate::tui::{handler, views};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Put the terminal into raw mode on the alternate screen
pub fn init_terminal() -> SpendlogResult<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore the terminal to its normal state
pub fn restore_terminal() -> SpendlogResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI until the user quits
pub fn run_tui(store: ExpenseStore) -> SpendlogResult<()> {
    // Restore the terminal before the default hook prints the panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));

    let mut terminal = init_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let mut app = App::new(store);

    let result = run_loop(&mut terminal, &events, &mut app);

    restore_terminal()?;
    result
}

fn run_loop(terminal: &mut Tui, events: &EventHandler, app: &mut App) -> SpendlogResult<()> {
    while !app.should_quit {
        terminal.draw(|frame| views::render(frame, app))?;
        let event = events.next()?;
        handler::handle_event(app, event);
    }
    Ok(())
}
