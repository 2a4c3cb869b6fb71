//! Implements a SQLite backed daily expense store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DailyExpense, DatabaseID},
    stores::DailyExpenseStore,
};

/// Stores the recurring daily expenses in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteDailyExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteDailyExpenseStore {
    /// Create a new store from the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CreateTable for SQLiteDailyExpenseStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS daily_expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                time TEXT NOT NULL,
                amount REAL NOT NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteDailyExpenseStore {
    type ReturnType = DailyExpense;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<DailyExpense, rusqlite::Error> {
        Ok(DailyExpense {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            category: row.get(offset + 2)?,
            time: row.get(offset + 3)?,
            amount: row.get(offset + 4)?,
        })
    }
}

impl DailyExpenseStore for SQLiteDailyExpenseStore {
    fn create(
        &mut self,
        name: &str,
        category: &str,
        time: OffsetDateTime,
        amount: f64,
    ) -> Result<DailyExpense, Error> {
        let id: DatabaseID = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare(
                "INSERT INTO daily_expense (name, category, time, amount)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id",
            )?
            .query_row((name, category, time, amount), |row| row.get(0))?;

        Ok(DailyExpense {
            id,
            name: name.to_owned(),
            category: category.to_owned(),
            time,
            amount,
        })
    }

    fn get(&self, id: DatabaseID) -> Result<DailyExpense, Error> {
        let daily_expense = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare("SELECT id, name, category, time, amount FROM daily_expense WHERE id = :id")?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(daily_expense)
    }

    fn get_all(&self) -> Result<Vec<DailyExpense>, Error> {
        self.connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare("SELECT id, name, category, time, amount FROM daily_expense")?
            .query_map([], Self::map_row)?
            .map(|maybe_expense| maybe_expense.map_err(Error::from))
            .collect()
    }

    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .execute("DELETE FROM daily_expense WHERE id = :id", &[(":id", &id)])?;

        match rows_affected {
            0 => Err(Error::DeleteMissingDailyExpense),
            _ => Ok(()),
        }
    }
}
