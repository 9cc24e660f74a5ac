use super::models::MenuId;
use thiserror::Error;

/// Errors raised by the menu store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The menu name or item list was blank.
    #[error("Please fill in all fields")]
    ValidationFailed,
    /// No menu with this id exists in the store.
    #[error("Menu {0} not found")]
    NotFound(MenuId),
}

pub type DomainResult<T> = Result<T, DomainError>;
