//! Defines the singleton balance record.

use serde::{Deserialize, Serialize};

/// The amount of money currently available, along with a description of the
/// last change.
///
/// There is exactly one balance record. It is created lazily with a zero
/// default on the first write and mutated only by the operations in
/// [crate::ledger].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// The current balance. May be negative after an overdraw.
    pub balance: f64,
    /// A description of the change that produced this balance.
    pub detail: String,
}

impl Balance {
    /// The implied balance before anything has been written.
    pub fn zero() -> Self {
        Self {
            balance: 0.0,
            detail: String::new(),
        }
    }
}
