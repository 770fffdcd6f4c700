//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// No files matched the provided patterns
    NoFilesMatched(String),
    /// Rules file error
    RulesError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoFilesMatched(patterns) => {
                write!(f, "No files found matching: {patterns}")
            }
            CliError::RulesError(msg) => write!(f, "Rules error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_no_files_matched_display() {
        let error = CliError::NoFilesMatched("*.txt".to_string());
        assert_eq!(error.to_string(), "No files found matching: *.txt");
    }

    #[test]
    fn test_rules_error_display() {
        let error = CliError::RulesError("duplicate key".to_string());
        assert_eq!(error.to_string(), "Rules error: duplicate key");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::InvalidPattern("x".to_string());
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn test_cli_result_type_alias() {
        let success: CliResult<String> = Ok("test".to_string());
        assert!(success.is_ok());

        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.is_err());
    }
}
