//! Defines traits for mapping the domain models to SQLite, and the versioned
//! additive schema migration.

use rusqlite::{Connection, Row, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    stores::sqlite::{
        SQLiteActionStore, SQLiteBalanceStore, SQLiteDailyExpenseStore, SQLiteSettingsStore,
        SQLiteTransactionStore,
    },
};

/// The schema version stamped into `PRAGMA user_version`.
///
/// Version 1 created the `transaction`, `action` and `daily_expense` tables.
/// Version 2 added the `balance` and `settings` tables.
pub const SCHEMA_VERSION: i64 = 2;

/// A trait for adding an object schema to the database.
pub trait CreateTable {
    /// Create the table for the model if it does not already exist.
    ///
    /// # Errors
    /// Returns an error if there is an SQL error.
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error>;
}

/// A trait for mapping a `rusqlite::Row` from the database to a concrete rust
/// type.
pub trait MapRow {
    /// The type that a row maps to.
    type ReturnType;

    /// Convert a row into a concrete type, reading from the first column.
    ///
    /// # Errors
    /// Returns an error if a row item cannot be converted into the
    /// corresponding rust type.
    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Self::map_row_with_offset(row, 0)
    }

    /// Convert a row into a concrete type, reading from the column at
    /// `offset`.
    ///
    /// The offset is useful when tables have been joined and two types are
    /// constructed from the one query.
    ///
    /// # Errors
    /// Returns an error if a row item cannot be converted into the
    /// corresponding rust type, or if an invalid column index was used.
    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Self::ReturnType, rusqlite::Error>;
}

/// Create any tables missing from the database and stamp the current schema
/// version.
///
/// Migration is additive only: opening a database written by an older schema
/// version creates the missing tables without touching existing data.
///
/// # Errors
/// Returns an error if the database cannot be read or the tables cannot be
/// created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let version: i64 = connection.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if version >= SCHEMA_VERSION {
        return Ok(());
    }

    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    if version < 1 {
        SQLiteTransactionStore::create_table(&transaction)?;
        SQLiteActionStore::create_table(&transaction)?;
        SQLiteDailyExpenseStore::create_table(&transaction)?;
    }

    if version < 2 {
        SQLiteBalanceStore::create_table(&transaction)?;
        SQLiteSettingsStore::create_table(&transaction)?;
    }

    transaction.commit()?;

    connection.pragma_update(None, "user_version", SCHEMA_VERSION)?;

    Ok(())
}
