//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the menu board with ratatui and maps crossterm
//! key events onto controller intents.

pub mod ui;
pub mod input;
pub mod terminal;

pub use ui::*;
pub use input::*;
pub use terminal::TerminalGuard;
