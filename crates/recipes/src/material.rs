use serde::{Deserialize, Serialize};

use larder_inventory::format_amount;

/// One required ingredient line of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMaterial {
    pub name: String,
    /// Required amount. Meaningless when `unit` is a qualitative token
    /// ("a pinch" of salt is not 1 of anything).
    pub amount: f64,
    pub unit: String,
}

impl RecipeMaterial {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// Amount rendered for display ("200g", "2piece", or just "to taste").
    pub fn display_amount(&self) -> String {
        format_amount(self.amount, &self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_amount_respects_qualitative_units() {
        assert_eq!(RecipeMaterial::new("pork", 200.0, "g").display_amount(), "200g");
        assert_eq!(
            RecipeMaterial::new("salt", 1.0, "a pinch").display_amount(),
            "a pinch"
        );
    }
}
