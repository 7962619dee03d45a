//! Display placeholders for fully-depleted tracked keys.
//!
//! A low-stock key can still have matching items (of low quantity) in the
//! list; those render as themselves. A key with *no* matching item at all
//! would otherwise vanish from the low-stock view, so one zero-quantity
//! placeholder is fabricated for it per query. Placeholders are never
//! persisted and never offered a delete action.

use tracing::debug;

use larder_core::ItemId;
use larder_glyphs::{GlyphHistory, KeywordTable, infer};
use larder_inventory::{InventoryItem, ItemCategory, StorageArea};

/// Unit assigned to placeholders (nothing real to measure).
const PLACEHOLDER_UNIT: &str = "piece";

/// Fabricate one placeholder for every low-stock key with no matching item.
///
/// `low_stock` is the flagged key set from [`crate::stock::low_stock_keys`];
/// keys that match at least one existing item are skipped.
pub fn synthesize_placeholders(
    low_stock: &[String],
    items: &[InventoryItem],
    history: &GlyphHistory,
    keywords: &KeywordTable,
) -> Vec<InventoryItem> {
    low_stock
        .iter()
        .filter(|key| !items.iter().any(|item| item.canonical_key() == key.as_str()))
        .map(|key| {
            debug!(key = %key, "synthesizing shortage placeholder");
            InventoryItem {
                id: ItemId::new(),
                name: key.clone(),
                short_name: Some(key.clone()),
                storage: StorageArea::Pantry,
                category: ItemCategory::Other,
                location: String::new(),
                expires_on: None,
                quantity: 0.0,
                unit: PLACEHOLDER_UNIT.to_string(),
                added_on: None,
                glyph: infer(key, Some(ItemCategory::Other), history, keywords),
                synthesized: true,
            }
        })
        .collect()
}

/// The inventory list with shortage placeholders appended, for display.
pub fn augment_for_display(
    items: &[InventoryItem],
    low_stock: &[String],
    history: &GlyphHistory,
    keywords: &KeywordTable,
) -> Vec<InventoryItem> {
    let mut out = items.to_vec();
    out.extend(synthesize_placeholders(low_stock, items, history, keywords));
    out
}

/// Items the user may delete. Synthesized placeholders are excluded; they
/// are regenerated per query and have nothing to delete.
pub fn delete_candidates(items: &[InventoryItem]) -> impl Iterator<Item = &InventoryItem> {
    items.iter().filter(|item| !item.synthesized)
}
