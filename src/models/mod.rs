//! This module defines the domain data types.

mod action;
mod balance;
mod daily_expense;
mod transaction;

pub use action::Action;
pub use balance::Balance;
pub use daily_expense::DailyExpense;
pub use transaction::{INCOME_CATEGORY, Transaction, TransactionBuilder, TransactionKind};

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseID = i64;
