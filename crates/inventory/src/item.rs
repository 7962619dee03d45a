use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use larder_core::{DomainError, DomainResult, ItemId};

/// Where an item is physically stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageArea {
    Refrigerator,
    FreezerMain,
    FreezerSub,
    VegetableDrawer,
    Pantry,
}

/// Coarse food category, used for grouping and glyph defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Dairy,
    Egg,
    Meat,
    Fish,
    Vegetable,
    Fruit,
    Other,
}

/// A single tracked food item.
///
/// Plain record: created by the add/scan flows, mutated by the edit flows,
/// deleted explicitly by the user. Derived views (expiry status, low-stock
/// flags, recipe resolution) are recomputed from the full item list rather
/// than stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    /// Full display name, e.g. "pork belly".
    pub name: String,
    /// Short-form name used for grouping and threshold lookup, e.g. "pork".
    /// [`InventoryItem::canonical_key`] falls back to `name` when absent.
    pub short_name: Option<String>,
    pub storage: StorageArea,
    pub category: ItemCategory,
    /// Free-text sub-location, e.g. "door pocket".
    pub location: String,
    /// None means "no expiry"; such items never enter the expired/near buckets.
    pub expires_on: Option<NaiveDate>,
    /// Stock on hand. Non-negative; fractional stock (half a cabbage) is legal.
    pub quantity: f64,
    pub unit: String,
    /// None only for synthesized placeholders, which were never registered.
    pub added_on: Option<NaiveDate>,
    /// Display glyph (emoji).
    pub glyph: String,
    /// Display-only placeholder fabricated for a fully-depleted,
    /// threshold-tracked key. Never persisted, never offered deletion.
    pub synthesized: bool,
}

impl InventoryItem {
    /// Create a real (non-synthesized) item, validating boundary invariants.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        storage: StorageArea,
        category: ItemCategory,
        quantity: f64,
        unit: impl Into<String>,
        added_on: NaiveDate,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !quantity.is_finite() {
            return Err(DomainError::validation("quantity must be finite"));
        }
        if quantity < 0.0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }

        Ok(Self {
            id,
            name,
            short_name: None,
            storage,
            category,
            location: String::new(),
            expires_on: None,
            quantity,
            unit: unit.into(),
            added_on: Some(added_on),
            glyph: String::new(),
            synthesized: false,
        })
    }

    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_expiry(mut self, expires_on: NaiveDate) -> Self {
        self.expires_on = Some(expires_on);
        self
    }

    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    /// The short-form name used to group entries and look up thresholds and
    /// synonyms. Falls back to the display name when no (non-blank) short
    /// name is set.
    pub fn canonical_key(&self) -> &str {
        match self.short_name.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => &self.name,
        }
    }

    /// Adjust stock by `delta` (consume or restock).
    ///
    /// Rejects adjustments that would drive stock negative, and any
    /// adjustment to a synthesized placeholder.
    pub fn adjust_quantity(&mut self, delta: f64) -> DomainResult<()> {
        if self.synthesized {
            return Err(DomainError::invariant(
                "synthesized placeholders are display-only",
            ));
        }
        if !delta.is_finite() {
            return Err(DomainError::validation("delta must be finite"));
        }
        let next = self.quantity + delta;
        if next < 0.0 {
            return Err(DomainError::invariant("quantity cannot go negative"));
        }
        self.quantity = next;
        Ok(())
    }
}
