//! Contains traits and implementations for objects that store the domain
//! [models](crate::models).

mod action;
mod balance;
mod daily_expense;
mod settings;
mod transaction;

pub mod sqlite;

pub use action::ActionStore;
pub use balance::BalanceStore;
pub use daily_expense::DailyExpenseStore;
pub use settings::{DEFAULT_PAYDAY_DATE, SettingsStore};
pub use transaction::TransactionStore;
