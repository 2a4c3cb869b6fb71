//! Defines the store for the singleton balance record.

use crate::{Error, models::Balance};

/// Handles reads and writes of the singleton balance record.
///
/// Every write goes through the operations in [crate::ledger] so that the
/// balance stays consistent with the ledger.
pub trait BalanceStore {
    /// Retrieve the current balance.
    ///
    /// Returns the implied zero balance if nothing has been written yet.
    fn get(&self) -> Result<Balance, Error>;

    /// Overwrite the balance record with `balance` and `detail`.
    fn set(&mut self, balance: f64, detail: &str) -> Result<Balance, Error>;
}
