use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::RosterApp;
use super::event::{Event, EventHandler};
use crate::logging::{log_debug, log_error, log_info};

pub fn run_interactive_mode() -> Result<(), Box<dyn std::error::Error>> {
    log_info("Starting interactive mode");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let result = run_loop(&mut terminal);

    // Restore the terminal even when the loop bailed out.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log_info("Exiting interactive mode");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = match RosterApp::new() {
        Ok(app) => app,
        Err(e) => {
            log_error(&format!("Failed to open roster: {}", e));
            return Err(e);
        }
    };
    let events = EventHandler::new(100);

    loop {
        terminal.draw(|f| super::ui::draw(f, &app))?;

        match events.recv()? {
            Event::Key(key_event) => {
                log_debug(&format!("Key pressed: {:?}", key_event.code));
                app.handle_key(key_event.code);
            }
            Event::Tick => app.expire_notifications(),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
