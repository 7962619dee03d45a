//! Default shelf-life settings.
//!
//! The add/scan flows pre-fill an expiry date from a per-key day count the
//! user maintains in settings. The table is owned by the application layer
//! and passed in read-only per call.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// One shelf-life rule: canonical key -> days from registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryDefault {
    pub key: String,
    pub days: i64,
}

/// Per-key shelf-life day counts.
///
/// Only positive day counts apply; a missing key or a non-positive value
/// means "no default configured" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpiryDefaults {
    entries: Vec<ExpiryDefault>,
}

impl ExpiryDefaults {
    pub fn from_entries<K>(entries: impl IntoIterator<Item = (K, i64)>) -> Self
    where
        K: Into<String>,
    {
        let mut defaults = Self::default();
        for (key, days) in entries {
            defaults.set(key, days);
        }
        defaults
    }

    /// Configured shelf life for `key`, if any.
    pub fn days_for(&self, key: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.days)
            .filter(|d| *d > 0)
    }

    /// Set or replace the rule for `key`, preserving insertion order.
    pub fn set(&mut self, key: impl Into<String>, days: i64) {
        let key = key.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.days = days,
            None => self.entries.push(ExpiryDefault { key, days }),
        }
    }

    /// Suggested expiry date for `key` registered on `today`.
    pub fn suggest_expiry(&self, key: &str, today: NaiveDate) -> Option<NaiveDate> {
        let days = self.days_for(key)?;
        today.checked_add_days(Days::new(days as u64))
    }
}
