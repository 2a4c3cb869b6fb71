//! Defines the settings store trait.

use crate::Error;

/// The payday used when none has been saved: the 1st of the month.
pub const DEFAULT_PAYDAY_DATE: u8 = 1;

/// Persists user settings outside the ledger collections.
///
/// Callers normally read settings through
/// [SettingsCache](crate::settings::SettingsCache) rather than hitting the
/// store on every projection.
pub trait SettingsStore {
    /// The configured payday day-of-month (1-31).
    ///
    /// Returns [DEFAULT_PAYDAY_DATE] if the setting has never been written.
    fn payday_date(&self) -> Result<u8, Error>;

    /// Save the payday day-of-month.
    ///
    /// # Errors
    /// Returns [Error::InvalidPaydayDate] if `day` is outside 1-31.
    fn set_payday_date(&mut self, day: u8) -> Result<(), Error>;
}
