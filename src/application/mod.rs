//! Application layer managing session state and user intents.
//!
//! This module sits between the domain layer and the presentation layer:
//! it owns the menu store for the session and decides which intents apply
//! in the current role and mode.

pub mod state;
pub mod controller;

pub use state::*;
pub use controller::*;
