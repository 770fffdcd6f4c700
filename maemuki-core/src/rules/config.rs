//! TOML schema and validation for rule tables
//!
//! This module defines the document format that both the embedded rule
//! table and user-supplied rules files use.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Root rules document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Table identification
    pub metadata: Metadata,
    /// Literal phrase substitutions
    #[serde(default)]
    pub lexicon: Vec<LexiconEntry>,
    /// Regex rewrite rules, applied in declaration order
    #[serde(default)]
    pub patterns: Vec<PatternEntry>,
    /// Exact sentence-ending overrides
    #[serde(default)]
    pub endings: Vec<EndingEntry>,
}

/// Rule table metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Short identifier, e.g. "ja"
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// One literal substitution pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Phrase to replace (must be non-empty)
    pub negative: String,
    /// Replacement phrase
    pub positive: String,
}

/// One regex rewrite rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Rule name, used in logs and error messages
    pub name: String,
    /// Regex with at least one capturing group
    pub pattern: String,
    /// Replacement template; `${n}` expands to capture `n`
    pub replacement: String,
}

/// One sentence-ending override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndingEntry {
    /// Exact substring to replace
    pub from: String,
    /// Replacement substring
    pub to: String,
}

impl RulesConfig {
    /// Parse a rules document from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Check every table invariant that the schema alone cannot express.
    ///
    /// Pattern compilation and capture-group checks happen later, when
    /// each pattern entry is turned into a compiled rule.
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.is_empty() {
            return Err(RulesError::EmptyMetadataCode);
        }

        let mut keys = std::collections::HashSet::new();
        for (index, entry) in self.lexicon.iter().enumerate() {
            if entry.negative.is_empty() {
                return Err(RulesError::EmptyNegativePhrase { index });
            }
            if !keys.insert(entry.negative.as_str()) {
                return Err(RulesError::DuplicateKey {
                    key: entry.negative.clone(),
                });
            }
        }

        for (index, entry) in self.endings.iter().enumerate() {
            if entry.from.is_empty() {
                return Err(RulesError::EmptyEndingKey { index });
            }
            // Ending keys join the lexical pass, so they share its
            // uniqueness requirement.
            if !keys.insert(entry.from.as_str()) {
                return Err(RulesError::DuplicateKey {
                    key: entry.from.clone(),
                });
            }
        }

        for a in &self.endings {
            for b in &self.endings {
                if a.from != b.from && a.from.contains(b.from.as_str()) {
                    return Err(RulesError::NestedEndingKeys {
                        outer: a.from.clone(),
                        inner: b.from.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
