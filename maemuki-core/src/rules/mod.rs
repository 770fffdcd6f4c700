//! Rule tables: schema, validation, compilation, and the embedded
//! built-in table.
//!
//! Tables are immutable after compilation; there is no runtime
//! mutation API. The built-in Japanese table is embedded as TOML and
//! parsed once on first use.

pub mod config;
mod endings;
mod lexicon;
mod patterns;

pub use config::RulesConfig;
pub use endings::EndingTable;
pub use lexicon::Lexicon;
pub use patterns::{PatternRule, Rewrite};

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{Result, RulesError};

/// Embedded built-in rule table
const BUILTIN_TOML: &str = include_str!("../../configs/positive_ja.toml");

static BUILTIN: OnceLock<std::result::Result<Arc<RuleSet>, String>> = OnceLock::new();

/// Compiled, immutable rule tables for one conversion dialect.
#[derive(Debug)]
pub struct RuleSet {
    metadata: config::Metadata,
    lexicon: Vec<(String, String)>,
    substitutions: Lexicon,
    patterns: Vec<PatternRule>,
    endings: EndingTable,
}

impl RuleSet {
    /// The embedded Japanese table, parsed once and cached process-wide.
    pub fn builtin() -> Result<Arc<RuleSet>> {
        let cached = BUILTIN.get_or_init(|| {
            RuleSet::from_toml_str(BUILTIN_TOML)
                .map(Arc::new)
                .map_err(|e| e.to_string())
        });
        cached.clone().map_err(RulesError::Builtin)
    }

    /// Load and compile a rules document from TOML text.
    pub fn from_toml_str(text: &str) -> Result<RuleSet> {
        Self::from_config(&RulesConfig::from_toml_str(text)?)
    }

    /// Load and compile a rules file.
    pub fn from_file(path: &Path) -> Result<RuleSet> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate and compile a parsed rules document.
    pub fn from_config(config: &RulesConfig) -> Result<RuleSet> {
        config.validate()?;

        let patterns = config
            .patterns
            .iter()
            .map(|p| PatternRule::from_template(&p.name, &p.pattern, &p.replacement))
            .collect::<Result<Vec<_>>>()?;

        let lexicon: Vec<(String, String)> = config
            .lexicon
            .iter()
            .map(|e| (e.negative.clone(), e.positive.clone()))
            .collect();

        let ending_pairs: Vec<(String, String)> = config
            .endings
            .iter()
            .map(|e| (e.from.clone(), e.to.clone()))
            .collect();

        // Ending phrases join the lexical pass so a longer idiomatic
        // phrase wins over any shorter word it contains.
        let merged = lexicon
            .iter()
            .cloned()
            .chain(ending_pairs.iter().cloned())
            .collect();

        Ok(RuleSet {
            metadata: config.metadata.clone(),
            lexicon,
            substitutions: Lexicon::new(merged),
            patterns,
            endings: EndingTable::new(ending_pairs),
        })
    }

    /// Table metadata.
    pub fn metadata(&self) -> &config::Metadata {
        &self.metadata
    }

    /// Lexicon entries in declaration order.
    pub fn lexicon(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lexicon.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }

    /// Number of lexicon entries.
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// The first-pass substitution table (lexicon plus ending keys,
    /// longest key first).
    pub fn substitutions(&self) -> &Lexicon {
        &self.substitutions
    }

    /// Pattern rules in declaration order.
    pub fn patterns(&self) -> &[PatternRule] {
        &self.patterns
    }

    /// The sentence-ending override table.
    pub fn endings(&self) -> &EndingTable {
        &self.endings
    }
}
