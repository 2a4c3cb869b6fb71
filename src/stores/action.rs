//! Defines the audit action store trait.

use time::OffsetDateTime;

use crate::{
    Error,
    models::{Action, DatabaseID},
};

/// Handles the append-only audit trail of balance-affecting events.
pub trait ActionStore {
    /// Append a new action. The store assigns the ID.
    ///
    /// `from` and `to` are the balance before and after the event, already
    /// formatted for display.
    fn create(
        &mut self,
        date: OffsetDateTime,
        action: &str,
        detail: &str,
        from: &str,
        to: &str,
    ) -> Result<Action, Error>;

    /// Retrieve an action by its ID.
    fn get(&self, id: DatabaseID) -> Result<Action, Error>;

    /// Retrieve all actions, in unspecified order.
    fn get_all(&self) -> Result<Vec<Action>, Error>;

    /// Remove every action from the store.
    fn clear(&mut self) -> Result<(), Error>;
}
