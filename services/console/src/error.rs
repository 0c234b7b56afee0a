//! Order entry error taxonomy
//!
//! Distinguishes rejection causes for diagnostics; the user always sees
//! the same one-line usage message regardless of the cause.

use thiserror::Error;

/// Why an input line was rejected before reaching the engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected 4 fields, got {0}")]
    WrongFieldCount(usize),

    #[error("user id is not an integer: {0}")]
    InvalidUserId(String),

    #[error("amount is not an integer: {0}")]
    InvalidAmount(String),

    #[error("price is not an integer: {0}")]
    InvalidPrice(String),

    #[error("unknown side: {0}")]
    InvalidSide(String),

    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    #[error("price must be positive, got {0}")]
    NonPositivePrice(i64),
}

impl ParseError {
    /// The single message shown to the user for any rejected line
    pub fn user_message(&self) -> &'static str {
        "Invalid format. Use: userId amount price buy|sell"
    }
}
