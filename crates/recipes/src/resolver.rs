//! Partition a recipe's materials into present and missing against stock.

use serde::{Deserialize, Serialize};
use tracing::debug;

use larder_inventory::{InventoryItem, is_qualitative};

use crate::material::RecipeMaterial;
use crate::synonyms::SynonymTable;

/// Outcome of resolving one recipe against the inventory. Every input
/// material lands in exactly one of the two lists, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialSplit {
    pub present: Vec<RecipeMaterial>,
    pub missing: Vec<RecipeMaterial>,
}

/// Resolve `materials` against the current `items`.
///
/// A material is "present" when matching stock covers it:
/// - no matching item at all -> missing;
/// - qualitative unit ("a pinch", "to taste", ...) -> present if any
///   candidate exists, regardless of amounts. Quantities on such lines are
///   not comparable to stock counts, so presence alone decides;
/// - same unit -> present when the summed quantity reaches the required
///   amount;
/// - different unit -> present. Cross-unit conversion ("200g" of a "2 piece"
///   stock) cannot be judged, and flagging it as missing would put items the
///   cook likely has onto the shopping list.
pub fn resolve(
    materials: &[RecipeMaterial],
    items: &[InventoryItem],
    synonyms: &SynonymTable,
) -> MaterialSplit {
    let mut split = MaterialSplit::default();

    for material in materials {
        if is_covered(material, items, synonyms) {
            split.present.push(material.clone());
        } else {
            split.missing.push(material.clone());
        }
    }

    debug!(
        present = split.present.len(),
        missing = split.missing.len(),
        "resolved recipe materials"
    );
    split
}

fn is_covered(
    material: &RecipeMaterial,
    items: &[InventoryItem],
    synonyms: &SynonymTable,
) -> bool {
    let candidates: Vec<&InventoryItem> = items
        .iter()
        .filter(|item| name_matches(material, item, synonyms))
        .collect();

    if candidates.is_empty() {
        debug!(material = %material.name, "no stock candidates");
        return false;
    }

    if is_qualitative(&material.unit) {
        return true;
    }

    let same_unit: f64 = candidates
        .iter()
        .filter(|item| item.unit == material.unit)
        .map(|item| item.quantity)
        .sum();

    if candidates.iter().any(|item| item.unit == material.unit) {
        let covered = same_unit >= material.amount;
        debug!(
            material = %material.name,
            required = material.amount,
            on_hand = same_unit,
            covered,
            "compared same-unit stock"
        );
        covered
    } else {
        // Only mismatched units on hand; assume covered rather than send
        // the cook shopping for something already in the fridge.
        true
    }
}

/// Bidirectional substring match between the material name and the item,
/// widened through the synonym table.
fn name_matches(
    material: &RecipeMaterial,
    item: &InventoryItem,
    synonyms: &SynonymTable,
) -> bool {
    let item_name = item.canonical_key();
    if overlaps(&material.name, item_name) {
        return true;
    }
    synonyms
        .expand(&material.name)
        .iter()
        .any(|alt| overlaps(alt, item_name))
}

fn overlaps(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}
