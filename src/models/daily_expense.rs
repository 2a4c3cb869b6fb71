//! Defines the recurring daily spending data point.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::DatabaseID;

/// A recurring daily spending data point.
///
/// Daily expenses never alter the balance; they are only input to the burn
/// rate estimate in [crate::projection].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyExpense {
    /// The ID assigned by the store.
    pub id: DatabaseID,
    /// A short description of the expense.
    pub name: String,
    /// A user-facing grouping label.
    pub category: String,
    /// When the expense was recorded. The weekday of this timestamp decides
    /// whether the entry counts towards the burn rate.
    pub time: OffsetDateTime,
    /// The amount spent. Always non-negative.
    pub amount: f64,
}
