//! Implements a SQLite backed settings store.
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::CreateTable,
    stores::{DEFAULT_PAYDAY_DATE, SettingsStore},
};

const PAYDAY_DATE_KEY: &str = "payday_date";

/// Stores user settings as key-value rows in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteSettingsStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteSettingsStore {
    /// Create a new store from the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CreateTable for SQLiteSettingsStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value INTEGER NOT NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl SettingsStore for SQLiteSettingsStore {
    fn payday_date(&self) -> Result<u8, Error> {
        let maybe_day = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare("SELECT value FROM settings WHERE key = :key")?
            .query_row(&[(":key", &PAYDAY_DATE_KEY)], |row| row.get(0));

        match maybe_day {
            Ok(day) => Ok(day),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(DEFAULT_PAYDAY_DATE),
            Err(error) => Err(error.into()),
        }
    }

    fn set_payday_date(&mut self, day: u8) -> Result<(), Error> {
        if !(1..=31).contains(&day) {
            return Err(Error::InvalidPaydayDate(day));
        }

        self.connection
            .lock()
            .expect("Could not acquire database lock")
            .execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                (PAYDAY_DATE_KEY, day),
            )?;

        Ok(())
    }
}
