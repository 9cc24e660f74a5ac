//! Infrastructure layer for process-level concerns.
//!
//! This module holds settings loading and log setup. No menu data passes
//! through here.

pub mod config;
pub mod logging;

pub use config::*;
pub use logging::*;
