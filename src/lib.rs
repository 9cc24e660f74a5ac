//! Menuboard - Terminal Menu Catalog Library
//!
//! A small chef/user menu catalog manager with a terminal interface.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
