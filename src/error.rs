//! Error types for the subscription ledger.

use thiserror::Error;

/// Main error type for ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Subscription already exists: {0}")]
    DuplicateName(String),

    #[error("Subscription not found: {0}")]
    NotFound(String),
}

impl LedgerError {
    /// Name of the subscription the error refers to.
    pub fn name(&self) -> &str {
        match self {
            LedgerError::DuplicateName(name) | LedgerError::NotFound(name) => name,
        }
    }
}

/// Errors produced while parsing human-entered fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid cost: {0:?}")]
    InvalidCost(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0:?}")]
    InvalidDate(String),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
