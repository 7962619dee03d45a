//! Ingredient synonym dictionary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name -> alternate names, used to widen candidate search in the resolver.
///
/// Expansion is symmetric: if "noodles" lists "udon", a material named
/// "udon" also expands to "noodles". The table is not transitively closed;
/// alternates-of-alternates are not followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn from_entries<K, A>(entries: impl IntoIterator<Item = (K, Vec<A>)>) -> Self
    where
        K: Into<String>,
        A: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, alts)| (k.into(), alts.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, alternates: Vec<String>) {
        self.entries.insert(name.into(), alternates);
    }

    /// All names equivalent to `name`: its own entry plus every key that
    /// lists `name` as an alternate.
    pub fn expand(&self, name: &str) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .entries
            .get(name)
            .map(|alts| alts.iter().map(String::as_str).collect())
            .unwrap_or_default();

        for (key, alts) in &self.entries {
            if key != name && alts.iter().any(|a| a == name) && !out.contains(&key.as_str()) {
                out.push(key);
            }
        }
        out
    }

    /// The built-in dictionary shipped with the app.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("rice", vec!["cooked rice", "white rice"]),
            ("pork", vec!["pork belly", "pork loin", "ground pork"]),
            ("chicken", vec!["chicken thigh", "chicken breast", "ground chicken"]),
            ("ground meat", vec!["ground pork", "ground beef", "ground chicken", "mince"]),
            ("scallion", vec!["green onion", "spring onion"]),
            ("noodles", vec!["udon", "soba", "pasta", "spaghetti", "ramen"]),
            ("potato", vec!["white potato", "new potato"]),
            ("carrot", vec!["baby carrot"]),
            ("onion", vec!["yellow onion", "red onion"]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_returns_listed_alternates() {
        let table = SynonymTable::builtin();
        let alts = table.expand("noodles");
        assert!(alts.contains(&"udon"));
        assert!(alts.contains(&"pasta"));
    }

    #[test]
    fn expand_is_symmetric() {
        let table = SynonymTable::builtin();
        // "udon" has no entry of its own but is listed under "noodles".
        assert!(table.expand("udon").contains(&"noodles"));
    }

    #[test]
    fn expand_is_not_transitive() {
        let table = SynonymTable::from_entries([
            ("a", vec!["b"]),
            ("b", vec!["c"]),
        ]);
        let alts = table.expand("a");
        assert!(alts.contains(&"b"));
        assert!(!alts.contains(&"c"));
    }

    #[test]
    fn unknown_name_expands_to_nothing() {
        assert!(SynonymTable::builtin().expand("durian").is_empty());
    }
}
