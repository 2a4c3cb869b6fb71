//! Implements a SQLite backed balance store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::Balance,
    stores::BalanceStore,
};

/// The fixed row key of the singleton balance record.
const BALANCE_ROW_ID: i64 = 1;

/// Reads and writes the singleton balance record in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteBalanceStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteBalanceStore {
    /// Create a new store from the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CreateTable for SQLiteBalanceStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS balance (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                balance REAL NOT NULL,
                detail TEXT NOT NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteBalanceStore {
    type ReturnType = Balance;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Balance, rusqlite::Error> {
        Ok(Balance {
            balance: row.get(offset)?,
            detail: row.get(offset + 1)?,
        })
    }
}

impl BalanceStore for SQLiteBalanceStore {
    /// Retrieve the current balance.
    ///
    /// The balance record is created lazily by the first write, so a missing
    /// row reads as the implied zero balance rather than an error.
    fn get(&self) -> Result<Balance, Error> {
        let maybe_balance = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare("SELECT balance, detail FROM balance WHERE id = :id")?
            .query_row(&[(":id", &BALANCE_ROW_ID)], Self::map_row);

        match maybe_balance {
            Ok(balance) => Ok(balance),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Balance::zero()),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, balance: f64, detail: &str) -> Result<Balance, Error> {
        self.connection
            .lock()
            .expect("Could not acquire database lock")
            .execute(
                "INSERT INTO balance (id, balance, detail) VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                     balance = excluded.balance,
                     detail = excluded.detail",
                (BALANCE_ROW_ID, balance, detail),
            )?;

        Ok(Balance {
            balance,
            detail: detail.to_owned(),
        })
    }
}
