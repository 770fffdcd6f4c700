//! Rule-table error types
//!
//! Conversion itself is total and never fails; errors exist only for
//! loading and validating rule tables.

use thiserror::Error;

/// Errors raised while loading or validating a rule table
#[derive(Error, Debug)]
pub enum RulesError {
    /// Rules file could not be read
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    /// Rules document is not valid TOML or does not match the schema
    #[error("failed to parse rules TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// `metadata.code` is empty
    #[error("metadata code must not be empty")]
    EmptyMetadataCode,

    /// A lexicon entry has an empty negative phrase
    #[error("lexicon entry {index} has an empty negative phrase")]
    EmptyNegativePhrase {
        /// Zero-based position in the lexicon table
        index: usize,
    },

    /// The same substitution key appears twice (within the lexicon, or
    /// in both the lexicon and the ending table)
    #[error("duplicate substitution key: {key}")]
    DuplicateKey {
        /// The offending key
        key: String,
    },

    /// A pattern failed to compile
    #[error("pattern '{name}' is not a valid regex: {source}")]
    InvalidPattern {
        /// The pattern rule's name
        name: String,
        /// The underlying regex error
        source: regex::Error,
    },

    /// A pattern declares no capturing group
    #[error("pattern '{name}' has no capturing group")]
    MissingCaptureGroup {
        /// The pattern rule's name
        name: String,
    },

    /// An ending entry has an empty key
    #[error("ending entry {index} has an empty key")]
    EmptyEndingKey {
        /// Zero-based position in the ending table
        index: usize,
    },

    /// One ending key is a substring of another, which would make the
    /// ending table order-dependent
    #[error("ending key '{outer}' contains ending key '{inner}'")]
    NestedEndingKeys {
        /// The longer key
        outer: String,
        /// The contained key
        inner: String,
    },

    /// The embedded rule table failed to load (build defect)
    #[error("built-in rule table failed to load: {0}")]
    Builtin(String),
}

/// Result type for rule-table operations
pub type Result<T> = std::result::Result<T, RulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RulesError::DuplicateKey {
            key: "無理".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate substitution key: 無理");

        let err = RulesError::NestedEndingKeys {
            outer: "もう無理".to_string(),
            inner: "無理".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ending key 'もう無理' contains ending key '無理'"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err = RulesError::EmptyMetadataCode;
        let _: &dyn std::error::Error = &err;
    }
}
