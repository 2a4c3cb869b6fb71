//! Dompet is the core of a personal money manager: it records a balance,
//! incomes, expenses and recurring daily expenses, projects the surplus (or
//! deficit) remaining at the next payday, and filters the transaction history
//! for display.
//!
//! Presentation layers are external callers: they hold an [AppState], move
//! money through the operations in [ledger], and read projections and history
//! through the pure functions in [projection] and [history].

#![warn(missing_docs)]

pub mod app_state;
pub mod currency;
pub mod db;
pub mod history;
pub mod ledger;
pub mod models;
pub mod projection;
pub mod settings;
pub mod stores;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use history::{HistoryQuery, SortMode, filter_and_sort};
pub use projection::Projection;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The underlying store could not be opened, or a read or write failed.
    ///
    /// The operation is not retried internally. Callers may retry or surface
    /// the failure; the prior state is left unchanged.
    #[error("the ledger store is unavailable: {0}")]
    StorageUnavailable(rusqlite::Error),

    /// The requested record could not be found.
    #[error("the requested record could not be found")]
    NotFound,

    /// An empty detail string was used to edit the balance.
    ///
    /// Balance edits appear in the audit trail, so each one must say why it
    /// happened.
    #[error("a balance edit requires a non-empty detail")]
    MissingDetail,

    /// A negative or non-finite amount was used to create a record.
    ///
    /// Stored amounts are always non-negative; the direction of a transaction
    /// is carried by its kind, not by the sign of the number.
    #[error("{0} is not a valid amount: amounts must be finite and non-negative")]
    InvalidAmount(f64),

    /// A payday day-of-month outside the range 1-31 was used.
    #[error("{0} is not a valid payday day of month, expected a value in 1-31")]
    InvalidPaydayDate(u8),

    /// The balance was updated but the dependent ledger or action write
    /// failed.
    ///
    /// The two writes are ordered rather than atomic, so this window exists
    /// by contract. It is surfaced distinctly from [Error::StorageUnavailable]
    /// so that callers can decide whether to reconcile.
    #[error("the balance was updated but the matching record was not written: {0}")]
    PartialWrite(Box<Error>),

    /// Tried to delete a transaction that does not exist.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// Tried to delete a daily expense that does not exist.
    #[error("tried to delete a daily expense that is not in the store")]
    DeleteMissingDailyExpense,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::StorageUnavailable(error)
            }
        }
    }
}
