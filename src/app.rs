use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::LogBuffer;
use crate::state::{PageId, State};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config, start_page: Option<PageId>, log_buffer: LogBuffer) -> Result<()> {
        info!("Starting application...");
        let theme = Theme::by_name(&config.theme_name).unwrap_or_default();
        let page = start_page.unwrap_or(config.start_page);
        let mut app = App {
            state: State::new(page, config.fallback_page, theme, log_buffer),
            config,
        };
        let result = app.start_ui();
        info!("Exiting application...");
        result
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let mut terminal_event_handler =
            TerminalEventHandler::new(self.config.shortcuts.clone(), &mut self.state);
        let result = loop {
            if let Err(e) = terminal.draw(|frame| crate::ui::render(frame, &mut self.state)) {
                break Err(e.into());
            }
            match terminal_event_handler.handle_next(&mut self.state) {
                Ok(true) => {}
                Ok(false) => {
                    debug!("Received application exit request.");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}
