//! Validate command implementation

use anyhow::Result;
use clap::Args;
use maemuki_core::RuleSet;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rules file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rules file: {}", self.rules.display());

        match RuleSet::from_file(&self.rules) {
            Ok(rules) => {
                println!("✓ Rules file is valid!");
                println!(
                    "  Table: {} ({})",
                    rules.metadata().name,
                    rules.metadata().code
                );
                println!("  Lexicon entries: {}", rules.lexicon_len());
                println!("  Pattern rules: {}", rules.patterns().len());
                println!("  Sentence endings: {}", rules.endings().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rules file is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
