//! The fixed four-stage conversion pipeline.
//!
//! Order is part of the contract: lexical substitution, pattern
//! rewriting, sentence-ending override, terminal punctuation. A later
//! pass may act on text produced by an earlier pass.

use tracing::{debug, debug_span};

use crate::rules::RuleSet;

/// Terminal punctuation that suppresses the appended emphasis mark.
/// ASCII `?` is recognized; full-width `？` deliberately is not.
pub(crate) const TERMINALS: [char; 3] = ['！', '。', '?'];

/// One stage of the conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Literal substitution, longest key first
    Lexical,
    /// Regex rewrite rules in declaration order
    Pattern,
    /// Exact sentence-ending overrides
    SentenceEnding,
    /// Emphasis mark appended when no terminal punctuation is present
    Punctuation,
}

/// Outcome of a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassTrace {
    /// Which pass ran
    pub pass: Pass,
    /// Whether it changed the text
    pub changed: bool,
}

/// Result of one conversion call: the final text plus the sequence of
/// passes applied. Owned entirely by the caller; nothing is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Converted text
    pub text: String,
    /// Pass-by-pass trace; empty for empty input, which short-circuits
    /// before any pass runs
    pub passes: Vec<PassTrace>,
}

/// Run the full pipeline. Total over every input string.
pub(crate) fn run(rules: &RuleSet, input: &str) -> ConversionResult {
    if input.is_empty() {
        return ConversionResult {
            text: String::new(),
            passes: Vec::new(),
        };
    }

    let _span = debug_span!("convert", chars = input.chars().count()).entered();
    let mut passes = Vec::with_capacity(4);

    let lexical = rules.substitutions().apply(input);
    passes.push(PassTrace {
        pass: Pass::Lexical,
        changed: lexical != input,
    });

    let mut patterned = lexical;
    let mut pattern_changed = false;
    for rule in rules.patterns() {
        let next = rule.apply(&patterned);
        if next != patterned {
            debug!(rule = rule.name(), "pattern rule matched");
            pattern_changed = true;
            patterned = next;
        }
    }
    passes.push(PassTrace {
        pass: Pass::Pattern,
        changed: pattern_changed,
    });

    let ended = rules.endings().apply(&patterned);
    passes.push(PassTrace {
        pass: Pass::SentenceEnding,
        changed: ended != patterned,
    });

    let (text, appended) = normalize_terminal(ended);
    passes.push(PassTrace {
        pass: Pass::Punctuation,
        changed: appended,
    });

    ConversionResult { text, passes }
}

/// Append `！` unless the text is empty or already ends with terminal
/// punctuation. Returns the text and whether anything was appended.
pub(crate) fn normalize_terminal(mut text: String) -> (String, bool) {
    if text.is_empty() || ends_with_terminal(&text) {
        (text, false)
    } else {
        text.push('！');
        (text, true)
    }
}

fn ends_with_terminal(text: &str) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|c| TERMINALS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_emphasis_without_terminal() {
        let (text, appended) = normalize_terminal("ありがとう".to_string());
        assert_eq!(text, "ありがとう！");
        assert!(appended);
    }

    #[test]
    fn test_existing_terminals_are_kept() {
        for input in ["よし！", "です。", "ok?"] {
            let (text, appended) = normalize_terminal(input.to_string());
            assert_eq!(text, input);
            assert!(!appended);
        }
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let (once, _) = normalize_terminal("がんばる".to_string());
        let (twice, appended) = normalize_terminal(once.clone());
        assert_eq!(once, twice);
        assert!(!appended);
    }

    #[test]
    fn test_fullwidth_question_mark_is_not_terminal() {
        let (text, appended) = normalize_terminal("元気？".to_string());
        assert_eq!(text, "元気？！");
        assert!(appended);
    }

    #[test]
    fn test_empty_text_untouched() {
        let (text, appended) = normalize_terminal(String::new());
        assert_eq!(text, "");
        assert!(!appended);
    }
}
