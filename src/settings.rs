//! A read-through cache over the settings store.
//!
//! The payday date is read on every projection but changes rarely, so the
//! cache keeps the last known value in memory and only hits the store on the
//! first read or after a write.

use crate::{Error, stores::SettingsStore};

/// Caches the payday date in front of a [SettingsStore].
#[derive(Debug, Clone)]
pub struct SettingsCache<S> {
    store: S,
    payday_date: Option<u8>,
}

impl<S> SettingsCache<S>
where
    S: SettingsStore,
{
    /// Wrap `store` with an empty cache.
    pub fn new(store: S) -> Self {
        Self {
            store,
            payday_date: None,
        }
    }

    /// The configured payday day-of-month, read from the store on the first
    /// call and from memory afterwards.
    pub fn payday_date(&mut self) -> Result<u8, Error> {
        if let Some(day) = self.payday_date {
            return Ok(day);
        }

        let day = self.store.payday_date()?;
        self.payday_date = Some(day);

        Ok(day)
    }

    /// Save a new payday day-of-month and update the cache.
    ///
    /// If the store write fails the cache is invalidated so the next read
    /// reflects whatever actually persisted.
    pub fn set_payday_date(&mut self, day: u8) -> Result<(), Error> {
        match self.store.set_payday_date(day) {
            Ok(()) => {
                self.payday_date = Some(day);
                Ok(())
            }
            Err(error) => {
                self.payday_date = None;
                Err(error)
            }
        }
    }
}
