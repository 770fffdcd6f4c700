//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use maemuki_core::RuleSet;

pub mod convert;
pub mod generate_rules;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text to positive phrasing
    Convert(convert::ConvertArgs),

    /// Validate a custom rules file
    Validate(validate::ValidateArgs),

    /// Generate a starter rules file
    GenerateRules(generate_rules::GenerateRulesArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateRules(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the built-in rule tables
    Rules,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Rules => {
                let rules = RuleSet::builtin()?;
                println!(
                    "Rule table: {} ({})",
                    rules.metadata().name,
                    rules.metadata().code
                );
                println!();
                println!("Lexicon ({} entries):", rules.lexicon_len());
                for (negative, positive) in rules.lexicon() {
                    println!("  {negative} -> {positive}");
                }
                println!();
                println!("Patterns ({} rules):", rules.patterns().len());
                for rule in rules.patterns() {
                    println!("  {} ({})", rule.name(), rule.pattern());
                }
                println!();
                println!("Sentence endings ({} entries):", rules.endings().len());
                for (from, to) in rules.endings().iter() {
                    println!("  {from} -> {to}");
                }
            }
            ListCommands::Formats => {
                println!("text - converted text, one record per line");
                println!("json - JSON array of records with statistics");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_commands_execute() {
        assert!(ListCommands::Formats.execute().is_ok());
        assert!(ListCommands::Rules.execute().is_ok());
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }
}
