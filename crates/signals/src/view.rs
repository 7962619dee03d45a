//! Inventory list-view helpers: per-item display state, filter modes and
//! sort orders. These operate on the (possibly placeholder-augmented) list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use larder_inventory::{InventoryItem, StorageArea};

use crate::status::{ExpiryStatus, classify};

/// Card styling bucket for one item. Priority order when several apply:
/// out-of-stock > expired > near-expiry > low-stock > normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayState {
    OutOfStock,
    Expired,
    Near,
    LowStock,
    Normal,
}

/// Resolve the display state of one item against today's urgency buckets
/// and the flagged low-stock key set.
pub fn display_state(
    item: &InventoryItem,
    today: NaiveDate,
    low_stock: &[String],
) -> DisplayState {
    if item.quantity <= 0.0 {
        return DisplayState::OutOfStock;
    }
    match classify(item, today) {
        ExpiryStatus::Expired => DisplayState::Expired,
        ExpiryStatus::Near => DisplayState::Near,
        ExpiryStatus::Ok | ExpiryStatus::None => {
            if low_stock.iter().any(|k| k == item.canonical_key()) {
                DisplayState::LowStock
            } else {
                DisplayState::Normal
            }
        }
    }
}

/// Which slice of the inventory the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    All,
    Expired,
    Near,
    LowStock,
}

/// Narrow the list to the selected mode.
///
/// `storage` only applies in [`FilterMode::All`]; the urgency modes require
/// stock on hand (an out-of-stock item cannot be "expiring").
pub fn filter_items(
    items: &[InventoryItem],
    mode: FilterMode,
    storage: Option<StorageArea>,
    today: NaiveDate,
    low_stock: &[String],
) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| match mode {
            FilterMode::All => storage.is_none_or(|s| item.storage == s),
            FilterMode::Expired => classify(item, today) == ExpiryStatus::Expired,
            FilterMode::Near => classify(item, today) == ExpiryStatus::Near,
            FilterMode::LowStock => low_stock.iter().any(|k| k == item.canonical_key()),
        })
        .cloned()
        .collect()
}

/// List orderings offered by the inventory view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Soonest expiry first; items without an expiry date go last.
    Expiry,
    /// Most recently registered first; placeholders (never registered) last.
    Added,
    Name,
}

/// Sort in place according to `order`. Ties keep their relative order.
pub fn sort_items(items: &mut [InventoryItem], order: SortOrder) {
    match order {
        SortOrder::Expiry => items.sort_by(|a, b| match (a.expires_on, b.expires_on) {
            (None, None) => core::cmp::Ordering::Equal,
            (None, Some(_)) => core::cmp::Ordering::Greater,
            (Some(_), None) => core::cmp::Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        }),
        SortOrder::Added => items.sort_by(|a, b| b.added_on.cmp(&a.added_on)),
        SortOrder::Name => items.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}

/// Signed days from `today` until the item's expiry, for badge text.
/// Negative for already-expired items; None without an expiry date.
pub fn days_until_expiry(item: &InventoryItem, today: NaiveDate) -> Option<i64> {
    item.expires_on.map(|d| (d - today).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::ItemId;
    use larder_inventory::ItemCategory;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2023, 10, 25)
    }

    fn item(name: &str, quantity: f64, expires_on: Option<NaiveDate>) -> InventoryItem {
        let mut item = InventoryItem::new(
            ItemId::new(),
            name,
            StorageArea::Refrigerator,
            ItemCategory::Other,
            quantity,
            "piece",
            date(2023, 10, 20),
        )
        .unwrap();
        item.expires_on = expires_on;
        item
    }

    #[test]
    fn out_of_stock_beats_every_other_state() {
        // Expired date and flagged key, but no stock: grey wins.
        let mut subject = item("egg", 0.0, Some(date(2023, 10, 1)));
        subject.synthesized = true;
        let state = display_state(&subject, today(), &["egg".to_string()]);
        assert_eq!(state, DisplayState::OutOfStock);
    }

    #[test]
    fn expiry_urgency_beats_low_stock() {
        let subject = item("egg", 1.0, Some(date(2023, 10, 26)));
        let state = display_state(&subject, today(), &["egg".to_string()]);
        assert_eq!(state, DisplayState::Near);
    }

    #[test]
    fn low_stock_applies_when_expiry_is_fine() {
        let subject = item("egg", 1.0, Some(date(2023, 12, 1)));
        let state = display_state(&subject, today(), &["egg".to_string()]);
        assert_eq!(state, DisplayState::LowStock);

        let state = display_state(&subject, today(), &[]);
        assert_eq!(state, DisplayState::Normal);
    }

    #[test]
    fn urgency_filters_require_stock_on_hand() {
        let items = vec![
            item("old milk", 1.0, Some(date(2023, 10, 20))),
            item("drained milk", 0.0, Some(date(2023, 10, 20))),
        ];
        let expired = filter_items(&items, FilterMode::Expired, None, today(), &[]);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name, "old milk");
    }

    #[test]
    fn all_mode_can_narrow_by_storage_area() {
        let mut pantry = item("rice", 1.0, None);
        pantry.storage = StorageArea::Pantry;
        let items = vec![item("milk", 1.0, None), pantry];

        let all = filter_items(&items, FilterMode::All, None, today(), &[]);
        assert_eq!(all.len(), 2);

        let only_pantry =
            filter_items(&items, FilterMode::All, Some(StorageArea::Pantry), today(), &[]);
        assert_eq!(only_pantry.len(), 1);
        assert_eq!(only_pantry[0].name, "rice");
    }

    #[test]
    fn low_stock_filter_matches_canonical_key() {
        let items = vec![
            item("whole milk", 1.0, None).with_short_name("milk"),
            item("egg", 2.0, None),
        ];
        let flagged = vec!["milk".to_string()];
        let shown = filter_items(&items, FilterMode::LowStock, None, today(), &flagged);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "whole milk");
    }

    #[test]
    fn expiry_sort_puts_dateless_items_last() {
        let mut items = vec![
            item("c", 1.0, None),
            item("b", 1.0, Some(date(2023, 11, 1))),
            item("a", 1.0, Some(date(2023, 10, 26))),
        ];
        sort_items(&mut items, SortOrder::Expiry);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn added_sort_is_newest_first_with_placeholders_last() {
        let mut oldest = item("oldest", 1.0, None);
        oldest.added_on = Some(date(2023, 10, 1));
        let mut placeholder = item("placeholder", 0.0, None);
        placeholder.added_on = None;
        let newest = item("newest", 1.0, None); // added 2023-10-20

        let mut items = vec![placeholder, oldest, newest];
        sort_items(&mut items, SortOrder::Added);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["newest", "oldest", "placeholder"]);
    }

    #[test]
    fn days_until_expiry_is_signed() {
        assert_eq!(
            days_until_expiry(&item("a", 1.0, Some(date(2023, 10, 27))), today()),
            Some(2)
        );
        assert_eq!(
            days_until_expiry(&item("a", 1.0, Some(date(2023, 10, 23))), today()),
            Some(-2)
        );
        assert_eq!(days_until_expiry(&item("a", 1.0, None), today()), None);
    }
}
