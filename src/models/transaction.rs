//! Defines the `Transaction` type, the unit of the append-only ledger.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, models::DatabaseID};

/// The category label reserved for income transactions.
pub const INCOME_CATEGORY: &str = "Income";

/// Whether a transaction took money out of the balance or added to it.
///
/// The stored amount is always non-negative; the kind carries the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money was spent.
    Expense,
    /// Money was earned.
    Income,
}

impl TransactionKind {
    /// The tag persisted for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "expense" => Ok(TransactionKind::Expense),
            "income" => Ok(TransactionKind::Income),
            other => Err(FromSqlError::Other(
                format!("unknown transaction kind \"{other}\"").into(),
            )),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// To create a new `Transaction`, build a [TransactionBuilder] and pass it to
/// [TransactionStore::create](crate::stores::TransactionStore::create), which
/// assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the store.
    pub id: DatabaseID,
    /// A short description of what the transaction was for.
    pub name: String,
    /// When the transaction happened.
    pub date: OffsetDateTime,
    /// How much money moved. Always non-negative, see [TransactionKind].
    pub amount: f64,
    /// A user-facing grouping label. [INCOME_CATEGORY] is reserved for
    /// income records.
    pub category: String,
    /// Whether the amount was spent or earned.
    pub kind: TransactionKind,
}

/// Builder for a new [Transaction].
///
/// The builder is finalised by
/// [TransactionStore::create](crate::stores::TransactionStore::create).
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionBuilder {
    pub(crate) name: String,
    pub(crate) date: OffsetDateTime,
    pub(crate) amount: f64,
    pub(crate) category: String,
    pub(crate) kind: TransactionKind,
}

impl TransactionBuilder {
    /// Create a builder for a transaction of `amount`, dated now.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if `amount` is negative or not finite.
    /// Amounts carry no sign; the direction comes from `kind`.
    pub fn new(name: &str, amount: f64, kind: TransactionKind) -> Result<Self, Error> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        Ok(Self {
            name: name.to_owned(),
            date: OffsetDateTime::now_utc(),
            amount,
            category: String::new(),
            kind,
        })
    }

    /// Set the date for the transaction.
    pub fn date(mut self, date: OffsetDateTime) -> Self {
        self.date = date;
        self
    }

    /// Set the category label for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Attach the store-assigned `id`, producing the final record.
    pub fn finalise(self, id: DatabaseID) -> Transaction {
        Transaction {
            id,
            name: self.name,
            date: self.date,
            amount: self.amount,
            category: self.category,
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod transaction_builder_tests {
    use crate::Error;

    use super::{TransactionBuilder, TransactionKind};

    #[test]
    fn new_fails_on_negative_amount() {
        let builder = TransactionBuilder::new("Refund?", -50.0, TransactionKind::Expense);

        assert_eq!(builder, Err(Error::InvalidAmount(-50.0)));
    }

    #[test]
    fn new_fails_on_non_finite_amount() {
        let builder = TransactionBuilder::new("Oops", f64::NAN, TransactionKind::Expense);

        assert!(matches!(builder, Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn new_accepts_zero_amount() {
        let builder = TransactionBuilder::new("Freebie", 0.0, TransactionKind::Expense);

        assert!(builder.is_ok());
    }

    #[test]
    fn finalise_keeps_fields() {
        let transaction = TransactionBuilder::new("Buy a book", 10_000.0, TransactionKind::Expense)
            .expect("amount should be valid")
            .category("Books")
            .finalise(42);

        assert_eq!(transaction.id, 42);
        assert_eq!(transaction.name, "Buy a book");
        assert_eq!(transaction.amount, 10_000.0);
        assert_eq!(transaction.category, "Books");
        assert_eq!(transaction.kind, TransactionKind::Expense);
    }
}
