//! Glyph resolution chain.

use larder_inventory::ItemCategory;

use crate::history::GlyphHistory;
use crate::keywords::KeywordTable;

/// Fallback when nothing else matches.
pub const GENERIC_GLYPH: &str = "📦";

/// Default glyph for a category, if it has one.
pub fn category_glyph(category: ItemCategory) -> Option<&'static str> {
    match category {
        ItemCategory::Dairy => Some("🥛"),
        ItemCategory::Egg => Some("🥚"),
        ItemCategory::Meat => Some("🥩"),
        ItemCategory::Fish => Some("🐟"),
        ItemCategory::Vegetable => Some("🥦"),
        ItemCategory::Fruit => Some("🍎"),
        ItemCategory::Other => None,
    }
}

/// Resolve a display glyph for `name`. First hit wins:
///
/// 1. exact [`GlyphHistory`] lookup;
/// 2. first [`KeywordTable`] rule whose pattern occurs in the name;
/// 3. category default;
/// 4. [`GENERIC_GLYPH`].
///
/// Pure function of its four inputs.
pub fn infer(
    name: &str,
    category: Option<ItemCategory>,
    history: &GlyphHistory,
    keywords: &KeywordTable,
) -> String {
    if let Some(glyph) = history.glyph_for(name) {
        return glyph.to_string();
    }
    if let Some(glyph) = keywords.first_match(name) {
        return glyph.to_string();
    }
    if let Some(glyph) = category.and_then(category_glyph) {
        return glyph.to_string();
    }
    GENERIC_GLYPH.to_string()
}
