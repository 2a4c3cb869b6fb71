//! Defines the audit-trail entry shown to the user as a notification.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::models::DatabaseID;

/// An audit-trail entry recording a balance-affecting event.
///
/// Actions are append-only and can be cleared in bulk; they back the
/// notification list in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The ID assigned by the store.
    pub id: DatabaseID,
    /// When the event happened.
    pub date: OffsetDateTime,
    /// The label of the event, e.g. "Balance Updated".
    pub action: String,
    /// The user-supplied description of the change.
    pub detail: String,
    /// The balance before the change, as a formatted currency string.
    pub from: String,
    /// The balance after the change, as a formatted currency string.
    pub to: String,
}
