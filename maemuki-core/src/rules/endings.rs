//! Sentence-ending overrides

/// Exact-substring overrides for idiomatic sentence endings.
///
/// Applied as unconditional global literal replacement in declaration
/// order. Validation guarantees no key is a substring of another, which
/// keeps the table order-independent for its current content.
#[derive(Debug, Clone, Default)]
pub struct EndingTable {
    entries: Vec<(String, String)>,
}

impl EndingTable {
    /// Build a table from `(from, to)` pairs in declaration order.
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { entries: pairs }
    }

    /// Apply every entry to `text`, returning the rewritten string.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (from, to) in &self.entries {
            if result.contains(from.as_str()) {
                result = result.replace(from.as_str(), to);
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

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, t)| (f.as_str(), t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> EndingTable {
        EndingTable::new(
            pairs
                .iter()
                .map(|(f, t)| (f.to_string(), t.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_exact_substring_replacement() {
        let endings = table(&[("もう無理", "もう少し頑張れる")]);
        assert_eq!(endings.apply("もう無理"), "もう少し頑張れる");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let endings = table(&[("終わった", "新しい始まり")]);
        assert_eq!(
            endings.apply("終わった。全部終わった"),
            "新しい始まり。全部新しい始まり"
        );
    }

    #[test]
    fn test_entries_apply_in_declaration_order() {
        let endings = table(&[("だめだ", "大丈夫"), ("ダメだ", "大丈夫")]);
        assert_eq!(endings.apply("だめだしダメだ"), "大丈夫し大丈夫");
    }

    #[test]
    fn test_no_match_passes_through() {
        let endings = table(&[("もう無理", "もう少し頑張れる")]);
        assert_eq!(endings.apply("まだ大丈夫"), "まだ大丈夫");
    }
}
