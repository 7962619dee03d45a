//! Low-stock flagging against configured thresholds.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use larder_inventory::InventoryItem;

/// One alert rule: canonical key -> minimum stock to hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdEntry {
    pub key: String,
    pub threshold: i64,
}

/// Ordered per-key low-stock thresholds.
///
/// Alerts are strictly opt-in: a key that is absent, or whose threshold is
/// non-positive, is never flagged no matter how low its stock. Entry order
/// is preserved and drives the order of the flagged-key output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdMap {
    entries: Vec<ThresholdEntry>,
}

impl ThresholdMap {
    pub fn from_entries<K>(entries: impl IntoIterator<Item = (K, i64)>) -> Self
    where
        K: Into<String>,
    {
        let mut map = Self::default();
        for (key, threshold) in entries {
            map.set(key, threshold);
        }
        map
    }

    /// Effective threshold for `key`: present and positive, else None.
    pub fn threshold_for(&self, key: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.threshold)
            .filter(|t| *t > 0)
    }

    /// Set or replace the rule for `key`, preserving insertion order.
    pub fn set(&mut self, key: impl Into<String>, threshold: i64) {
        let key = key.into();
        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.threshold = threshold,
            None => self.entries.push(ThresholdEntry { key, threshold }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThresholdEntry> {
        self.entries.iter()
    }
}

/// Sum stock per canonical key.
///
/// Quantities of different units under the same key are summed without
/// conversion; this is a deliberate simplification, not a unit system.
pub fn aggregate_by_key(items: &[InventoryItem]) -> HashMap<String, f64> {
    let mut grouped: HashMap<String, f64> = HashMap::new();
    for item in items {
        *grouped.entry(item.canonical_key().to_string()).or_insert(0.0) += item.quantity;
    }
    grouped
}

/// Keys whose aggregated stock is strictly below their configured threshold,
/// in threshold-map order.
///
/// A key with no matching items aggregates to zero, so a fully-depleted
/// tracked key is always flagged.
pub fn low_stock_keys(items: &[InventoryItem], thresholds: &ThresholdMap) -> Vec<String> {
    let grouped = aggregate_by_key(items);

    let mut flagged = Vec::new();
    for entry in thresholds.iter() {
        if entry.threshold <= 0 {
            continue;
        }
        let stock = grouped.get(&entry.key).copied().unwrap_or(0.0);
        if stock < entry.threshold as f64 {
            debug!(key = %entry.key, stock, threshold = entry.threshold, "low stock");
            flagged.push(entry.key.clone());
        }
    }
    flagged
}
