//! Generate rules command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-rules command
#[derive(Debug, Args)]
pub struct GenerateRulesArgs {
    /// Code for the new rule table
    #[arg(short, long, value_name = "CODE", default_value = "custom")]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateRulesArgs {
    /// Execute the generate-rules command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rules template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rules template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to add your own substitutions");
        println!("2. Validate your rules:");
        println!("   maemuki validate --rules {}", self.output.display());
        println!("3. Use them for conversion:");
        println!(
            "   maemuki convert --rules {} --text \"もう無理\"",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template rules content
    fn generate_template(&self) -> String {
        format!(
            r#"# Custom rule table for maemuki

[metadata]
code = "{}"
name = "Custom positive conversion rules"

# Literal phrase substitutions. Longer keys win over shorter keys they
# contain; every occurrence is replaced, with no word-boundary checks.

[[lexicon]]
negative = "最悪"
positive = "改善の余地が大きい"

[[lexicon]]
negative = "無理"
positive = "工夫が必要"

# Regex rewrites applied after the lexicon pass, in order. Each pattern
# needs at least one capturing group; ${{1}} in the replacement expands
# to the first capture.

[[patterns]]
name = "negative_nai"
pattern = '(.+)ない'
replacement = '${{1}}チャンスがある'

# Exact sentence endings replaced after pattern rewriting. Keys must
# not contain one another, and they join the lexicon's longest-first
# ordering.

[[endings]]
from = "もう無理"
to = "もう少し頑張れる"
"#,
            self.code
        )
    }
}
