//! Contains the SQLite backed stores and a convenience constructor for an
//! [AppState] that uses them.

mod action;
mod balance;
mod daily_expense;
mod settings;
mod transaction;

pub use action::SQLiteActionStore;
pub use balance::SQLiteBalanceStore;
pub use daily_expense::SQLiteDailyExpenseStore;
pub use settings::SQLiteSettingsStore;
pub use transaction::SQLiteTransactionStore;

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{AppState, Error, db::initialize, settings::SettingsCache};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<
    SQLiteBalanceStore,
    SQLiteTransactionStore,
    SQLiteDailyExpenseStore,
    SQLiteActionStore,
    SQLiteSettingsStore,
>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(
        SQLiteBalanceStore::new(connection.clone()),
        SQLiteTransactionStore::new(connection.clone()),
        SQLiteDailyExpenseStore::new(connection.clone()),
        SQLiteActionStore::new(connection.clone()),
        SettingsCache::new(SQLiteSettingsStore::new(connection)),
    ))
}
