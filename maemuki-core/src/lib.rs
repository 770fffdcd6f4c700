//! Negative-to-positive Japanese text conversion.
//!
//! The engine is a pure function over immutable rule tables: lexical
//! substitution (longest key first), regex pattern rewriting,
//! sentence-ending overrides, and terminal punctuation normalization,
//! applied in that fixed order. Conversion is total: any input string
//! produces an output string, and empty input stays empty.
//!
//! # Example
//!
//! ```rust
//! use maemuki_core::ConversionEngine;
//!
//! let engine = ConversionEngine::new().unwrap();
//! assert_eq!(engine.convert("今日は疲れた"), "今日はよく頑張った！");
//! assert_eq!(engine.convert("もう無理"), "もう少し頑張れる！");
//! assert_eq!(engine.convert(""), "");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod pipeline;
pub mod rules;

pub use error::{Result, RulesError};
pub use pipeline::{ConversionResult, Pass, PassTrace};
pub use rules::{EndingTable, Lexicon, PatternRule, Rewrite, RuleSet, RulesConfig};

use std::path::Path;
use std::sync::Arc;

/// The conversion engine: immutable rule tables plus the four-pass
/// pipeline.
///
/// The engine holds no mutable state; every call is independent and
/// referentially transparent, so a single engine can be shared across
/// threads without coordination.
#[derive(Debug, Clone)]
pub struct ConversionEngine {
    rules: Arc<RuleSet>,
}

impl ConversionEngine {
    /// Create an engine with the built-in Japanese rule table.
    ///
    /// Fails only if the embedded table cannot be loaded, which would
    /// be a build defect.
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: RuleSet::builtin()?,
        })
    }

    /// Create an engine from an already-compiled rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Create an engine from a rules TOML file.
    pub fn from_rules_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_rules(RuleSet::from_file(path.as_ref())?))
    }

    /// Convert `text`, returning the rewritten string.
    ///
    /// Total over all inputs: never fails, performs no I/O, and maps
    /// empty input to empty output.
    pub fn convert(&self, text: &str) -> String {
        pipeline::run(&self.rules, text).text
    }

    /// Convert `text` and report which passes changed it.
    pub fn convert_with_trace(&self, text: &str) -> ConversionResult {
        pipeline::run(&self.rules, text)
    }

    /// The engine's rule tables.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new().expect("built-in rule table should load")
    }
}

/// Convert text with the built-in rule table.
pub fn convert(text: &str) -> Result<String> {
    Ok(ConversionEngine::new()?.convert(text))
}
