//! Unified error types and result handling.

use crate::core::{receipt::ReceiptError, store::StoreError};
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Error raised directly by the database layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Failure reported by the bill store; the message is shown to users as-is
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Receipt file failed client-side validation
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// Required environment variable missing or malformed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
