//! Literal phrase substitution, longest key first

/// Ordered literal substitution table.
///
/// Entries are applied as unconditional global substring replacement,
/// longest key (in chars) first; ties keep declaration order. Each
/// replacement operates on the progressively updated text, so an
/// earlier, longer key can change what a later, shorter key sees.
/// There are no word-boundary checks.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<(String, String)>,
}

impl Lexicon {
    /// Build a table from substitution pairs in declaration order.
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        let mut entries = pairs;
        // sort_by is stable, so equal-length keys keep their order
        entries.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        Self { entries }
    }

    /// Apply every entry to `text`, returning the rewritten string.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (negative, positive) in &self.entries {
            if result.contains(negative.as_str()) {
                result = result.replace(negative.as_str(), positive);
            }
        }
        result
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in application order (longest key first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }
}
