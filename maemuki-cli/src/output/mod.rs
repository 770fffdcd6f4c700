//! Output formatting module

use anyhow::Result;
use serde::Serialize;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One converted input with its statistics
#[derive(Debug, Clone, Serialize)]
pub struct ConversionRecord {
    /// Where the input came from ("arg", "stdin", or a file path)
    pub source: String,
    /// The input text
    pub original: String,
    /// The converted text
    pub converted: String,
    /// Input length in chars
    pub original_chars: usize,
    /// Output length in chars
    pub converted_chars: usize,
    /// Whitespace-separated token count of the input
    pub word_count: usize,
}

impl ConversionRecord {
    /// Build a record from one conversion
    pub fn new(source: &str, original: &str, converted: &str) -> Self {
        Self {
            source: source.to_string(),
            original: original.to_string(),
            converted: converted.to_string(),
            original_chars: original.chars().count(),
            converted_chars: converted.chars().count(),
            word_count: original.split_whitespace().count(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single conversion record
    fn format_record(&mut self, record: &ConversionRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_statistics() {
        let record = ConversionRecord::new("stdin", "今日は疲れた", "今日はよく頑張った！");
        assert_eq!(record.original_chars, 6);
        assert_eq!(record.converted_chars, 10);
        assert_eq!(record.word_count, 1);
    }

    #[test]
    fn test_empty_input_statistics() {
        let record = ConversionRecord::new("arg", "", "");
        assert_eq!(record.original_chars, 0);
        assert_eq!(record.word_count, 0);
    }
}
