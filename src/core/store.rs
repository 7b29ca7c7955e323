//! Bill store seam.
//!
//! Controllers only ever see [`BillStore`]; the SQLite implementation lives in
//! [`crate::store`], and tests substitute mocks or in-memory fakes.

use crate::core::bill::{Bill, NewBill, ReceiptFile};
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a bill store. `Display` output is shown to users verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Remote answered with an HTTP error status
    #[error("Erreur {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// No bill with this id
    #[error("Bill not found: {id}")]
    NotFound {
        /// Requested id
        id: String,
    },

    /// Draft date is missing or not a `YYYY-MM-DD` calendar date
    #[error("Invalid bill date: '{date}'")]
    InvalidDate {
        /// Date as submitted
        date: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Stored row could not be turned back into a bill
    #[error("Corrupt bill record: {message}")]
    Corrupt {
        /// What was wrong with the row
        message: String,
    },
}

/// Convenience result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence collaborator for bills.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Every bill visible to the session, in store order.
    async fn list(&self) -> StoreResult<Vec<Bill>>;

    /// Persists a draft with its optional receipt; the store assigns id, receipt URL and
    /// `pending` status.
    async fn create(&self, draft: NewBill, receipt: Option<ReceiptFile>) -> StoreResult<Bill>;

    /// Rewrites the user-editable fields of an existing bill.
    async fn update(&self, id: &str, bill: NewBill) -> StoreResult<Bill>;
}
