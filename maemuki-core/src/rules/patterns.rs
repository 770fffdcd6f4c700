//! Regex rewrite rules

use std::fmt;

use regex::{Captures, Regex};

use crate::error::{Result, RulesError};

/// Rewrite function applied to the captures of a single match.
pub type Rewrite = Box<dyn Fn(&Captures) -> String + Send + Sync>;

/// One regex rewrite rule: a pattern with at least one capturing group
/// paired with a rewrite function over its captures.
pub struct PatternRule {
    name: String,
    regex: Regex,
    rewrite: Rewrite,
}

impl PatternRule {
    /// Pair a compiled regex with a rewrite function.
    ///
    /// Fails if the regex declares no capturing group.
    pub fn new(name: impl Into<String>, regex: Regex, rewrite: Rewrite) -> Result<Self> {
        let name = name.into();
        // captures_len counts the implicit whole-match group 0
        if regex.captures_len() < 2 {
            return Err(RulesError::MissingCaptureGroup { name });
        }
        Ok(Self {
            name,
            regex,
            rewrite,
        })
    }

    /// Build a rule from a pattern string and a replacement template.
    ///
    /// The template uses `regex` expansion syntax: `${1}` is the first
    /// capture. A reference to a group the pattern does not define
    /// expands to the empty string, so the rewrite stays total.
    pub fn from_template(
        name: impl Into<String>,
        pattern: &str,
        template: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|source| RulesError::InvalidPattern {
            name: name.clone(),
            source,
        })?;
        let template = template.into();
        let rewrite: Rewrite = Box::new(move |caps: &Captures| {
            let mut out = String::new();
            caps.expand(&template, &mut out);
            out
        });
        Self::new(name, regex, rewrite)
    }

    /// One global find-and-replace pass: every leftmost non-overlapping
    /// match is replaced by the rewrite function's output.
    pub fn apply(&self, text: &str) -> String {
        self.regex
            .replace_all(text, |caps: &Captures| (self.rewrite)(caps))
            .into_owned()
    }

    /// Rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source pattern text.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_capture_rewrite() {
        let rule =
            PatternRule::from_template("negative_nai", "(.+)ない", "${1}チャンスがある").unwrap();
        assert_eq!(rule.apply("できない"), "できチャンスがある");
    }

    #[test]
    fn test_greedy_prefix_spans_to_last_suffix() {
        let rule =
            PatternRule::from_template("negative_nai", "(.+)ない", "${1}チャンスがある").unwrap();
        // (.+) is greedy, so one match covers up to the final suffix.
        assert_eq!(
            rule.apply("わからない、できない"),
            "わからない、できチャンスがある"
        );
    }

    #[test]
    fn test_no_match_passes_through() {
        let rule =
            PatternRule::from_template("no_sei_de", "(.+)のせいで", "${1}のおかげで学べた")
                .unwrap();
        assert_eq!(rule.apply("雨のおかげで"), "雨のおかげで");
    }

    #[test]
    fn test_suffix_without_prefix_does_not_match() {
        let rule = PatternRule::from_template(
            "dekinakatta",
            "(.+)できなかった",
            "${1}する経験を積んだ",
        )
        .unwrap();
        // (.+) requires at least one char before the suffix.
        assert_eq!(rule.apply("できなかった"), "できなかった");
    }

    #[test]
    fn test_closure_rewrite() {
        let regex = Regex::new("(\\d+)円").unwrap();
        let rewrite: Rewrite = Box::new(|caps: &Captures| format!("{}yen", &caps[1]));
        let rule = PatternRule::new("yen", regex, rewrite).unwrap();
        assert_eq!(rule.apply("100円と200円"), "100yenと200yen");
    }

    #[test]
    fn test_pattern_without_capture_group_rejected() {
        let err = PatternRule::from_template("bad", "ない", "チャンス").unwrap_err();
        assert!(matches!(err, RulesError::MissingCaptureGroup { .. }));
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let err = PatternRule::from_template("bad", "(.+", "x").unwrap_err();
        assert!(matches!(err, RulesError::InvalidPattern { .. }));
    }

    #[test]
    fn test_unknown_group_reference_expands_empty() {
        let rule = PatternRule::from_template("odd", "(.+)ない", "${2}前向き").unwrap();
        assert_eq!(rule.apply("できない"), "前向き");
    }
}
