//! Implements a SQLite backed audit action store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{Action, DatabaseID},
    stores::ActionStore,
};

/// Stores the audit trail of balance-affecting events in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteActionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteActionStore {
    /// Create a new store from the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CreateTable for SQLiteActionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS action (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                action TEXT NOT NULL,
                detail TEXT NOT NULL,
                from_amount TEXT NOT NULL,
                to_amount TEXT NOT NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteActionStore {
    type ReturnType = Action;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Action, rusqlite::Error> {
        Ok(Action {
            id: row.get(offset)?,
            date: row.get(offset + 1)?,
            action: row.get(offset + 2)?,
            detail: row.get(offset + 3)?,
            from: row.get(offset + 4)?,
            to: row.get(offset + 5)?,
        })
    }
}

impl ActionStore for SQLiteActionStore {
    fn create(
        &mut self,
        date: OffsetDateTime,
        action: &str,
        detail: &str,
        from: &str,
        to: &str,
    ) -> Result<Action, Error> {
        let id: DatabaseID = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare(
                "INSERT INTO action (date, action, detail, from_amount, to_amount)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id",
            )?
            .query_row((date, action, detail, from, to), |row| row.get(0))?;

        Ok(Action {
            id,
            date,
            action: action.to_owned(),
            detail: detail.to_owned(),
            from: from.to_owned(),
            to: to.to_owned(),
        })
    }

    fn get(&self, id: DatabaseID) -> Result<Action, Error> {
        let action = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare(
                "SELECT id, date, action, detail, from_amount, to_amount
                 FROM action
                 WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(action)
    }

    fn get_all(&self) -> Result<Vec<Action>, Error> {
        self.connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare("SELECT id, date, action, detail, from_amount, to_amount FROM action")?
            .query_map([], Self::map_row)?
            .map(|maybe_action| maybe_action.map_err(Error::from))
            .collect()
    }

    fn clear(&mut self) -> Result<(), Error> {
        self.connection
            .lock()
            .expect("Could not acquire database lock")
            .execute("DELETE FROM action", ())?;

        Ok(())
    }
}
