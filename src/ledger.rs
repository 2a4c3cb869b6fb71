//! The operations that move money: recording expenses and incomes, editing
//! the balance and recording daily expenses.
//!
//! Every operation that changes the balance writes the balance first and the
//! dependent transaction or action record second. The writes are ordered
//! rather than atomic, so a failure of the second write leaves a consistent
//! balance with no matching record and is reported as
//! [Error::PartialWrite].
//!
//! Callers should recompute the [Projection](crate::projection::Projection)
//! after any operation here that returns `Ok`.

use time::OffsetDateTime;

use crate::{
    AppState, Error,
    currency::format_rupiah,
    models::{Balance, DailyExpense, INCOME_CATEGORY, Transaction, TransactionBuilder, TransactionKind},
    stores::{ActionStore, BalanceStore, DailyExpenseStore, TransactionStore},
};

/// The audit label attached to every direct balance edit.
const BALANCE_UPDATED: &str = "Balance Updated";

/// Record an expense of `amount`: the balance drops by `amount` and a
/// transaction is appended to the ledger.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `amount` is negative or not finite, and
/// [Error::PartialWrite] if the balance was written but the ledger write
/// failed.
pub async fn record_expense<B, T, D, A, S>(
    state: &mut AppState<B, T, D, A, S>,
    name: &str,
    amount: f64,
    category: &str,
) -> Result<Transaction, Error>
where
    B: BalanceStore,
    T: TransactionStore,
{
    let builder = TransactionBuilder::new(name, amount, TransactionKind::Expense)?
        .category(category);

    let old_balance = state.balance_store.get()?;
    state
        .balance_store
        .set(old_balance.balance - amount, "Transaction added")?;

    state
        .transaction_store
        .create(builder)
        .map_err(|error| Error::PartialWrite(Box::new(error)))
}

/// Record an income of `amount`: the balance rises by `amount` and a
/// transaction with the reserved income category is appended to the ledger.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `amount` is negative or not finite, and
/// [Error::PartialWrite] if the balance was written but the ledger write
/// failed.
pub async fn record_income<B, T, D, A, S>(
    state: &mut AppState<B, T, D, A, S>,
    name: &str,
    amount: f64,
) -> Result<Transaction, Error>
where
    B: BalanceStore,
    T: TransactionStore,
{
    let builder = TransactionBuilder::new(name, amount, TransactionKind::Income)?
        .category(INCOME_CATEGORY);

    let old_balance = state.balance_store.get()?;
    state
        .balance_store
        .set(old_balance.balance + amount, "Income added")?;

    state
        .transaction_store
        .create(builder)
        .map_err(|error| Error::PartialWrite(Box::new(error)))
}

/// Set the balance directly to `new_amount` and append an audit action with
/// the given `detail` and the formatted before and after amounts.
///
/// This is an absolute write, not a delta.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `new_amount` is not finite and
/// [Error::MissingDetail] if `detail` is empty, in both cases leaving the
/// balance unchanged, and [Error::PartialWrite] if the balance was written
/// but the audit write failed.
pub async fn edit_balance<B, T, D, A, S>(
    state: &mut AppState<B, T, D, A, S>,
    new_amount: f64,
    detail: &str,
) -> Result<Balance, Error>
where
    B: BalanceStore,
    A: ActionStore,
{
    // A negative balance is a legitimate overdraw, but NaN and the
    // infinities would poison every later projection.
    if !new_amount.is_finite() {
        return Err(Error::InvalidAmount(new_amount));
    }

    if detail.is_empty() {
        return Err(Error::MissingDetail);
    }

    let old_balance = state.balance_store.get()?;
    let new_balance = state.balance_store.set(new_amount, detail)?;

    state
        .action_store
        .create(
            OffsetDateTime::now_utc(),
            BALANCE_UPDATED,
            detail,
            &format_rupiah(old_balance.balance),
            &format_rupiah(new_balance.balance),
        )
        .map_err(|error| Error::PartialWrite(Box::new(error)))?;

    Ok(new_balance)
}

/// Record a recurring daily expense for the burn-rate estimate.
///
/// Daily expenses never alter the balance.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `amount` is negative or not finite.
pub async fn record_daily_expense<B, T, D, A, S>(
    state: &mut AppState<B, T, D, A, S>,
    name: &str,
    amount: f64,
    category: &str,
) -> Result<DailyExpense, Error>
where
    D: DailyExpenseStore,
{
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount(amount));
    }

    state
        .daily_expense_store
        .create(name, category, OffsetDateTime::now_utc(), amount)
}


#[cfg(test)]
mod partial_write_tests {
    use time::OffsetDateTime;

    use crate::{
        AppState, Error,
        models::{Action, Balance, DatabaseID, Transaction, TransactionBuilder},
        settings::SettingsCache,
        stores::{ActionStore, BalanceStore, DEFAULT_PAYDAY_DATE, SettingsStore, TransactionStore},
    };

    use super::{edit_balance, record_expense, record_income};

    fn storage_error() -> Error {
        Error::StorageUnavailable(rusqlite::Error::InvalidQuery)
    }

    struct InMemoryBalanceStore {
        balance: Balance,
    }

    impl InMemoryBalanceStore {
        fn new() -> Self {
            Self {
                balance: Balance::zero(),
            }
        }
    }

    impl BalanceStore for InMemoryBalanceStore {
        fn get(&self) -> Result<Balance, Error> {
            Ok(self.balance.clone())
        }

        fn set(&mut self, balance: f64, detail: &str) -> Result<Balance, Error> {
            self.balance = Balance {
                balance,
                detail: detail.to_owned(),
            };
            Ok(self.balance.clone())
        }
    }

    /// Fails every write, as if the store dropped out after the balance
    /// write succeeded.
    struct BrokenTransactionStore;

    impl TransactionStore for BrokenTransactionStore {
        fn create(&mut self, _builder: TransactionBuilder) -> Result<Transaction, Error> {
            Err(storage_error())
        }

        fn get(&self, _id: DatabaseID) -> Result<Transaction, Error> {
            Err(Error::NotFound)
        }

        fn get_all(&self) -> Result<Vec<Transaction>, Error> {
            Ok(Vec::new())
        }

        fn delete(&mut self, _id: DatabaseID) -> Result<(), Error> {
            Err(Error::DeleteMissingTransaction)
        }
    }

    struct BrokenActionStore;

    impl ActionStore for BrokenActionStore {
        fn create(
            &mut self,
            _date: OffsetDateTime,
            _action: &str,
            _detail: &str,
            _from: &str,
            _to: &str,
        ) -> Result<Action, Error> {
            Err(storage_error())
        }

        fn get(&self, _id: DatabaseID) -> Result<Action, Error> {
            Err(Error::NotFound)
        }

        fn get_all(&self) -> Result<Vec<Action>, Error> {
            Ok(Vec::new())
        }

        fn clear(&mut self) -> Result<(), Error> {
            Ok(())
        }
    }

    struct NullSettingsStore;

    impl SettingsStore for NullSettingsStore {
        fn payday_date(&self) -> Result<u8, Error> {
            Ok(DEFAULT_PAYDAY_DATE)
        }

        fn set_payday_date(&mut self, _day: u8) -> Result<(), Error> {
            Ok(())
        }
    }

    fn get_test_state() -> AppState<
        InMemoryBalanceStore,
        BrokenTransactionStore,
        (),
        BrokenActionStore,
        NullSettingsStore,
    > {
        AppState::new(
            InMemoryBalanceStore::new(),
            BrokenTransactionStore,
            (),
            BrokenActionStore,
            SettingsCache::new(NullSettingsStore),
        )
    }

    #[tokio::test]
    async fn record_expense_reports_partial_write_and_keeps_the_balance() {
        let mut state = get_test_state();

        let result = record_expense(&mut state, "Coffee", 25_000.0, "Food").await;

        assert_eq!(result, Err(Error::PartialWrite(Box::new(storage_error()))));
        // The balance write goes first and stays in place.
        assert_eq!(state.balance_store.get().unwrap().balance, -25_000.0);
    }

    #[tokio::test]
    async fn record_income_reports_partial_write_and_keeps_the_balance() {
        let mut state = get_test_state();

        let result = record_income(&mut state, "Salary", 200_000.0).await;

        assert_eq!(result, Err(Error::PartialWrite(Box::new(storage_error()))));
        assert_eq!(state.balance_store.get().unwrap().balance, 200_000.0);
    }

    #[tokio::test]
    async fn edit_balance_reports_partial_write_and_keeps_the_balance() {
        let mut state = get_test_state();

        let result = edit_balance(&mut state, 75_000.0, "Opening balance").await;

        assert_eq!(result, Err(Error::PartialWrite(Box::new(storage_error()))));
        assert_eq!(state.balance_store.get().unwrap().balance, 75_000.0);
    }
}
