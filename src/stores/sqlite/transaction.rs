//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    models::{DatabaseID, Transaction, TransactionBuilder},
    stores::TransactionStore,
};

/// Stores the ledger transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store from the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        // "transaction" is a keyword in SQL, so the table name must be quoted.
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                date TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                kind TEXT NOT NULL
            )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row_with_offset(row: &Row, offset: usize) -> Result<Transaction, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            date: row.get(offset + 2)?,
            amount: row.get(offset + 3)?,
            category: row.get(offset + 4)?,
            kind: row.get(offset + 5)?,
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let id: DatabaseID = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare(
                "INSERT INTO \"transaction\" (name, date, amount, category, kind)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id",
            )?
            .query_row(
                (
                    &builder.name,
                    builder.date,
                    builder.amount,
                    &builder.category,
                    builder.kind,
                ),
                |row| row.get(0),
            )?;

        Ok(builder.finalise(id))
    }

    fn get(&self, id: DatabaseID) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare(
                "SELECT id, name, date, amount, category, kind
                 FROM \"transaction\"
                 WHERE id = :id",
            )?
            .query_row(&[(":id", &id)], Self::map_row)?;

        Ok(transaction)
    }

    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .expect("Could not acquire database lock")
            .prepare("SELECT id, name, date, amount, category, kind FROM \"transaction\"")?
            .query_map([], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    fn delete(&mut self, id: DatabaseID) -> Result<(), Error> {
        let rows_affected = self
            .connection
            .lock()
            .expect("Could not acquire database lock")
            .execute("DELETE FROM \"transaction\" WHERE id = :id", &[(":id", &id)])?;

        match rows_affected {
            0 => Err(Error::DeleteMissingTransaction),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod sqlite_transaction_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::datetime;

    use crate::{
        Error,
        db::CreateTable,
        models::{TransactionBuilder, TransactionKind},
        stores::TransactionStore,
    };

    use super::SQLiteTransactionStore;

    fn get_test_store() -> SQLiteTransactionStore {
        let connection = Connection::open_in_memory().unwrap();
        SQLiteTransactionStore::create_table(&connection).unwrap();

        SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)))
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let mut store = get_test_store();

        let first = store
            .create(TransactionBuilder::new("Coffee", 25_000.0, TransactionKind::Expense).unwrap())
            .expect("Could not create transaction");
        let second = store
            .create(TransactionBuilder::new("Salary", 5_000_000.0, TransactionKind::Income).unwrap())
            .expect("Could not create transaction");

        assert!(
            second.id > first.id,
            "want id {} > {}",
            second.id,
            first.id
        );
    }

    #[test]
    fn create_then_get_round_trips() {
        let mut store = get_test_store();
        let builder = TransactionBuilder::new("Buy a book", 10_000.0, TransactionKind::Expense)
            .unwrap()
            .date(datetime!(2024-06-03 09:00 UTC))
            .category("Books");

        let want = store
            .create(builder)
            .expect("Could not create transaction");
        let got = store.get(want.id).expect("Could not get transaction");

        assert_eq!(want, got, "want transaction {want:?}, got {got:?}");
    }

    #[test]
    fn get_fails_on_missing_id() {
        let store = get_test_store();

        let got = store.get(999);

        assert_eq!(got, Err(Error::NotFound));
    }

    #[test]
    fn get_all_returns_every_transaction() {
        let mut store = get_test_store();
        let mut want = Vec::new();

        for name in ["Coffee", "Lunch", "Bus fare"] {
            let transaction = store
                .create(TransactionBuilder::new(name, 10_000.0, TransactionKind::Expense).unwrap())
                .expect("Could not create transaction");
            want.push(transaction);
        }

        let mut got = store.get_all().expect("Could not get transactions");
        got.sort_by_key(|transaction| transaction.id);

        assert_eq!(want, got);
    }

    #[test]
    fn delete_removes_the_transaction() {
        let mut store = get_test_store();
        let transaction = store
            .create(TransactionBuilder::new("Coffee", 25_000.0, TransactionKind::Expense).unwrap())
            .expect("Could not create transaction");

        store
            .delete(transaction.id)
            .expect("Could not delete transaction");

        assert_eq!(store.get(transaction.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_fails_on_missing_id() {
        let mut store = get_test_store();

        let got = store.delete(999);

        assert_eq!(got, Err(Error::DeleteMissingTransaction));
    }
}
