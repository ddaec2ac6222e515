use super::app::ZooApp;
use super::event::{Event, EventHandler};
use crate::config::Config;
use crate::error::{ErrorContext, ZooResult};
use crate::logging::{log_debug, log_error, log_info};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

pub async fn run_interactive_mode(config: Config) -> ZooResult<()> {
    log_info("Starting interactive mode");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let result = event_loop(&mut terminal, config);

    log_info("Exiting interactive mode");
    restore_terminal()?;
    terminal.show_cursor()?;

    result
}

/// Leave raw mode and the alternate screen. Also used by the panic hook.
pub fn restore_terminal() -> ZooResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: Config) -> ZooResult<()> {
    let events = EventHandler::new(config.tick_rate_ms);
    let mut app = ZooApp::new(config)?;

    loop {
        app.arm_splash_timer(events.sender());

        let mut rendered = Ok(());
        terminal.draw(|f| rendered = super::ui::draw(f, &app))?;
        if let Err(e) = rendered {
            log_error(&format!("Error drawing UI: {}", e));
            return Err(e);
        }

        let event = events.recv().context("Event channel closed")?;

        match event {
            Event::Key(key) => app.handle_key(key)?,
            Event::Tick => app.on_tick(),
            Event::SplashElapsed => app.on_splash_elapsed(),
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
