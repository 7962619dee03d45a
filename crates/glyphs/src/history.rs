//! User glyph overrides.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical key -> last user-chosen glyph.
///
/// Recorded by the application layer whenever the user picks a glyph by
/// hand; consulted first by inference so the override always sticks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlyphHistory {
    entries: HashMap<String, String>,
}

impl GlyphHistory {
    pub fn from_entries<K, G>(entries: impl IntoIterator<Item = (K, G)>) -> Self
    where
        K: Into<String>,
        G: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, g)| (k.into(), g.into()))
                .collect(),
        }
    }

    /// Exact lookup by canonical key.
    pub fn glyph_for(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Record a user override, replacing any previous choice for the key.
    pub fn record(&mut self, key: impl Into<String>, glyph: impl Into<String>) {
        self.entries.insert(key.into(), glyph.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_replaces_previous_choice() {
        let mut history = GlyphHistory::default();
        history.record("milk", "🥛");
        history.record("milk", "🍼");
        assert_eq!(history.glyph_for("milk"), Some("🍼"));
    }

    #[test]
    fn lookup_is_exact_not_substring() {
        let history = GlyphHistory::from_entries([("milk", "🥛")]);
        assert_eq!(history.glyph_for("soy milk"), None);
    }
}
