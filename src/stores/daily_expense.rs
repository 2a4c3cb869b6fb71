//! Defines the daily expense store trait.

use time::OffsetDateTime;

use crate::{
    Error,
    models::{DailyExpense, DatabaseID},
};

/// Handles the creation and retrieval of recurring daily expenses.
pub trait DailyExpenseStore {
    /// Insert a new daily expense into the store. The store assigns the ID.
    fn create(
        &mut self,
        name: &str,
        category: &str,
        time: OffsetDateTime,
        amount: f64,
    ) -> Result<DailyExpense, Error>;

    /// Retrieve a daily expense by its ID.
    fn get(&self, id: DatabaseID) -> Result<DailyExpense, Error>;

    /// Retrieve all daily expenses, in unspecified order.
    fn get_all(&self) -> Result<Vec<DailyExpense>, Error>;

    /// Delete the daily expense with `id`.
    fn delete(&mut self, id: DatabaseID) -> Result<(), Error>;
}
