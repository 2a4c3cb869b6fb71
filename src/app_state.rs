//! Defines the application state that bundles the stores for the ledger
//! operations.

use crate::settings::SettingsCache;

/// The state that the ledger operations act on.
///
/// `AppState` is generic over the store implementations so that the
/// operations can be tested against lightweight fakes. Production code uses
/// [SQLAppState](crate::stores::sqlite::SQLAppState), where every store
/// shares one SQLite connection.
#[derive(Debug, Clone)]
pub struct AppState<B, T, D, A, S> {
    /// Reads and writes the singleton balance.
    pub balance_store: B,
    /// The append-only transaction ledger.
    pub transaction_store: T,
    /// The recurring daily expenses that drive the burn rate.
    pub daily_expense_store: D,
    /// The audit trail of balance-affecting events.
    pub action_store: A,
    /// The cached user settings.
    pub settings: SettingsCache<S>,
}

impl<B, T, D, A, S> AppState<B, T, D, A, S> {
    /// Create the application state from its stores.
    pub fn new(
        balance_store: B,
        transaction_store: T,
        daily_expense_store: D,
        action_store: A,
        settings: SettingsCache<S>,
    ) -> Self {
        Self {
            balance_store,
            transaction_store,
            daily_expense_store,
            action_store,
            settings,
        }
    }
}
