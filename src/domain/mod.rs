//! Domain layer: menus, roles and the menu store.
//!
//! Everything here is independent of the terminal and of how intents
//! reach the store.

pub mod models;
pub mod store;
pub mod errors;

pub use models::*;
pub use store::*;
pub use errors::*;
