//! Defines the transaction store trait.

use crate::{
    Error,
    models::{DatabaseID, Transaction, TransactionBuilder},
};

/// Handles the creation and retrieval of ledger transactions.
pub trait TransactionStore {
    /// Insert a new transaction into the store. The store assigns the ID.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve a transaction by its ID.
    fn get(&self, id: DatabaseID) -> Result<Transaction, Error>;

    /// Retrieve all transactions, in unspecified order.
    ///
    /// Ordering for display is applied at read time by
    /// [filter_and_sort](crate::history::filter_and_sort).
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Delete the transaction with `id`.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
