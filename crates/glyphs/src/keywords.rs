//! Ordered keyword-to-glyph rules.

use serde::{Deserialize, Serialize};

/// One inference rule: if the pattern occurs in the name, use the glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub pattern: String,
    pub glyph: String,
}

/// Ordered list of substring rules; the first matching rule wins.
///
/// Order is load-bearing: where one pattern contains another ("soy milk" vs
/// "milk", "watermelon" vs "melon") the longer pattern must come first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordTable {
    rules: Vec<KeywordRule>,
}

impl KeywordTable {
    pub fn from_rules<P, G>(rules: impl IntoIterator<Item = (P, G)>) -> Self
    where
        P: Into<String>,
        G: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(pattern, glyph)| KeywordRule {
                    pattern: pattern.into(),
                    glyph: glyph.into(),
                })
                .collect(),
        }
    }

    /// Append a rule at the end (lowest priority).
    pub fn push(&mut self, pattern: impl Into<String>, glyph: impl Into<String>) {
        self.rules.push(KeywordRule {
            pattern: pattern.into(),
            glyph: glyph.into(),
        });
    }

    /// First rule whose pattern is a substring of `name`, in table order.
    pub fn first_match(&self, name: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| name.contains(r.pattern.as_str()))
            .map(|r| r.glyph.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The built-in rule set shipped with the app.
    pub fn builtin() -> Self {
        Self::from_rules([
            // Meat.
            ("beef", "🥩"),
            ("pork", "🥩"),
            ("chicken", "🍗"),
            ("ham", "🥩"),
            ("sausage", "🌭"),
            ("bacon", "🥓"),
            ("steak", "🥩"),
            ("mince", "🥩"),
            // Fish and seafood.
            ("salmon", "🐟"),
            ("mackerel", "🐟"),
            ("tuna", "🐟"),
            ("sashimi", "🐟"),
            ("fish", "🐟"),
            ("shrimp", "🦐"),
            ("prawn", "🦐"),
            ("crab", "🦀"),
            ("squid", "🦑"),
            ("octopus", "🐙"),
            ("clam", "🦪"),
            // Dairy ("soy milk" must precede "milk").
            ("soy milk", "🧃"),
            ("milk", "🥛"),
            ("yogurt", "🥣"),
            ("cheese", "🧀"),
            ("butter", "🧈"),
            ("cream", "🧁"),
            // Eggs ("eggplant" must precede "egg").
            ("eggplant", "🍆"),
            ("egg", "🥚"),
            // Vegetables.
            ("cabbage", "🥬"),
            ("lettuce", "🥬"),
            ("spinach", "🥬"),
            ("tomato", "🍅"),
            ("bell pepper", "🫑"),
            ("corn", "🌽"),
            ("cucumber", "🥒"),
            ("broccoli", "🥦"),
            ("avocado", "🥑"),
            ("sweet potato", "🍠"),
            ("potato", "🥔"),
            ("carrot", "🥕"),
            ("daikon", "🥢"),
            ("onion", "🧅"),
            ("garlic", "🧄"),
            ("ginger", "🫚"),
            ("mushroom", "🍄"),
            // Fruit ("watermelon" must precede "melon").
            ("apple", "🍎"),
            ("orange", "🍊"),
            ("lemon", "🍋"),
            ("banana", "🍌"),
            ("grape", "🍇"),
            ("strawberry", "🍓"),
            ("watermelon", "🍉"),
            ("melon", "🍈"),
            ("peach", "🍑"),
            ("kiwi", "🥝"),
            // Grains and noodles.
            ("rice", "🍚"),
            ("bread", "🍞"),
            ("croissant", "🥐"),
            ("baguette", "🥖"),
            ("udon", "🍜"),
            ("soba", "🍜"),
            ("ramen", "🍜"),
            ("noodle", "🍜"),
            ("spaghetti", "🍝"),
            ("pasta", "🍝"),
            ("curry", "🍛"),
            // Sweets.
            ("ice cream", "🍨"),
            ("chocolate", "🍫"),
            ("cookie", "🍪"),
            ("cake", "🍰"),
            ("pudding", "🍮"),
            // Drinks ("watermelon" above shields plain "water").
            ("beer", "🍺"),
            ("wine", "🍷"),
            ("juice", "🧃"),
            ("coffee", "☕"),
            ("tea", "🍵"),
            ("water", "💧"),
            // Condiments and staples.
            ("salt", "🧂"),
            ("sugar", "🫙"),
            ("soy sauce", "🫙"),
            ("mayonnaise", "🫙"),
            ("ketchup", "🫙"),
            ("oil", "🫗"),
            ("stock", "🍲"),
            ("tofu", "🧊"),
            ("natto", "🥢"),
            ("canned", "🥫"),
            ("jam", "🫙"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_follows_table_order() {
        let table = KeywordTable::builtin();
        // "soy milk" contains both "soy milk" and "milk"; the earlier,
        // longer rule wins.
        assert_eq!(table.first_match("soy milk"), Some("🧃"));
        assert_eq!(table.first_match("whole milk"), Some("🥛"));
    }

    #[test]
    fn longer_patterns_shield_shorter_ones() {
        let table = KeywordTable::builtin();
        assert_eq!(table.first_match("eggplant"), Some("🍆"));
        assert_eq!(table.first_match("egg"), Some("🥚"));
        assert_eq!(table.first_match("watermelon"), Some("🍉"));
        assert_eq!(table.first_match("sweet potato"), Some("🍠"));
    }

    #[test]
    fn substring_matches_anywhere_in_name() {
        let table = KeywordTable::builtin();
        assert_eq!(table.first_match("pork belly"), Some("🥩"));
        assert_eq!(table.first_match("frozen udon"), Some("🍜"));
    }

    #[test]
    fn no_rule_means_no_match() {
        let table = KeywordTable::builtin();
        assert_eq!(table.first_match("mystery box"), None);
    }

    #[test]
    fn deserializes_as_ordered_rule_list() {
        let table: KeywordTable =
            serde_json::from_str(r#"[{"pattern":"milk","glyph":"🥛"}]"#).unwrap();
        assert_eq!(table.first_match("milk"), Some("🥛"));
    }
}
