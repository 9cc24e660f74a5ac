//! Menuboard - Terminal Menu Catalog
//!
//! A terminal menu board with two views: chefs add and edit menus, users
//! browse them and request orders. Menus live only for the session.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::info;

use menuboard::application::ViewController;
use menuboard::domain::{MenuStore, Role};
use menuboard::infrastructure::{init_file_logging, Settings, SettingsOverrides};
use menuboard::presentation::{render_ui, InputHandler, TerminalGuard};

#[derive(Parser, Debug)]
#[command(name = "menuboard", version, about = "Terminal menu board for chefs and diners")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Role to start in (chef or user)
    #[arg(long)]
    role: Option<Role>,
    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// tracing filter directives, e.g. "info,menuboard=debug"
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            initial_role: self.role,
            log_file: self.log_file.clone(),
            log_filter: self.log_filter.clone(),
        }
    }
}

/// Entry point for the menu board.
///
/// Resolves settings, sets up logging and the terminal, and runs the event
/// loop until the user quits.
///
/// # Errors
///
/// Returns an error if settings cannot be loaded, logging cannot be set up,
/// or the terminal fails during runtime.
fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::resolve(args.config.as_deref(), args.overrides())
        .context("failed to load settings")?;

    if let Some(path) = &settings.log_file {
        init_file_logging(path, &settings.log_filter).context("failed to set up logging")?;
    }
    info!(role = %settings.initial_role, "starting menuboard");

    let mut guard = TerminalGuard::enter(io::stdout()).context("failed to set up terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("failed to create terminal")?;

    let mut controller = ViewController::new(MenuStore::new(), settings.initial_role);
    let res = run_app(&mut terminal, &mut controller);

    guard.restore().context("failed to restore terminal")?;

    info!(menus = controller.menus().len(), "menuboard closed");
    res.context("terminal error")
}

/// Main event loop.
///
/// Draws a frame, waits for a key press and hands it to the input handler.
/// `q` quits while browsing with no pending notification.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, controller: &mut ViewController) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, controller))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                let can_quit = !controller.is_modal_visible() && controller.notification().is_none();
                match key.code {
                    KeyCode::Char('q') if can_quit => return Ok(()),
                    _ => InputHandler::handle_key_event(controller, key.code, key.modifiers),
                }
            }
        }
    }
}
