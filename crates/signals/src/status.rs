//! Expiry-urgency classification.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use larder_inventory::InventoryItem;

/// Items expiring within this many days of "today" count as near-expiry.
pub const NEAR_WINDOW_DAYS: i64 = 3;

/// Expiry bucket for a single item on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    /// Expiry date is strictly before today.
    Expired,
    /// Expiry date falls within today..=today+3 days.
    Near,
    Ok,
    /// Not subject to expiry classification (no expiry date, or no stock).
    None,
}

/// Classify one item against `today`.
///
/// Pure function of `(expires_on, quantity, today)`; items with no stock or
/// no expiry date are out of scope for urgency and classify as `None`.
pub fn classify(item: &InventoryItem, today: NaiveDate) -> ExpiryStatus {
    if item.quantity <= 0.0 {
        return ExpiryStatus::None;
    }
    let Some(expires_on) = item.expires_on else {
        return ExpiryStatus::None;
    };

    if expires_on < today {
        ExpiryStatus::Expired
    } else if expires_on <= today + Duration::days(NEAR_WINDOW_DAYS) {
        ExpiryStatus::Near
    } else {
        ExpiryStatus::Ok
    }
}

/// Aggregate counts for the dashboard and navigation badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub expired: usize,
    pub near: usize,
    /// Every item, including those excluded from urgency classification.
    pub total: usize,
}

/// Recompute the full status summary from the current item list.
pub fn summarize(items: &[InventoryItem], today: NaiveDate) -> StatusCounts {
    let mut counts = StatusCounts {
        total: items.len(),
        ..StatusCounts::default()
    };
    for item in items {
        match classify(item, today) {
            ExpiryStatus::Expired => counts.expired += 1,
            ExpiryStatus::Near => counts.near += 1,
            ExpiryStatus::Ok | ExpiryStatus::None => {}
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::ItemId;
    use larder_inventory::{ItemCategory, StorageArea};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(quantity: f64, expires_on: Option<NaiveDate>) -> InventoryItem {
        let mut item = InventoryItem::new(
            ItemId::new(),
            "milk",
            StorageArea::Refrigerator,
            ItemCategory::Dairy,
            quantity,
            "bottle",
            date(2023, 10, 20),
        )
        .unwrap();
        item.expires_on = expires_on;
        item
    }

    const TODAY: fn() -> NaiveDate = || NaiveDate::from_ymd_opt(2023, 10, 25).unwrap();

    #[test]
    fn expired_strictly_before_today() {
        assert_eq!(
            classify(&item(1.0, Some(date(2023, 10, 24))), TODAY()),
            ExpiryStatus::Expired
        );
        // Expiring today is near, not expired.
        assert_eq!(
            classify(&item(1.0, Some(date(2023, 10, 25))), TODAY()),
            ExpiryStatus::Near
        );
    }

    #[test]
    fn near_window_is_inclusive_of_day_three() {
        assert_eq!(
            classify(&item(1.0, Some(date(2023, 10, 28))), TODAY()),
            ExpiryStatus::Near
        );
        assert_eq!(
            classify(&item(1.0, Some(date(2023, 10, 29))), TODAY()),
            ExpiryStatus::Ok
        );
    }

    #[test]
    fn no_expiry_or_no_stock_is_unclassified() {
        assert_eq!(classify(&item(1.0, None), TODAY()), ExpiryStatus::None);
        assert_eq!(
            classify(&item(0.0, Some(date(2023, 10, 20))), TODAY()),
            ExpiryStatus::None
        );
    }

    #[test]
    fn summarize_counts_every_item_in_total() {
        let items = vec![
            item(1.0, Some(date(2023, 10, 20))), // expired
            item(1.0, Some(date(2023, 10, 26))), // near
            item(1.0, Some(date(2023, 12, 1))),  // ok
            item(1.0, None),                     // unclassified
            item(0.0, Some(date(2023, 10, 20))), // no stock, unclassified
        ];
        let counts = summarize(&items, TODAY());
        assert_eq!(counts.expired, 1);
        assert_eq!(counts.near, 1);
        assert_eq!(counts.total, 5);
    }
}
