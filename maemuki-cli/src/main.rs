//! Entry point for the maemuki binary.

use clap::Parser;
use maemuki_cli::commands::Commands;

/// Rewrite negative Japanese text into positive phrasing
#[derive(Debug, Parser)]
#[command(name = "maemuki", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_convert() {
        let cli = Cli::try_parse_from(["maemuki", "convert", "--text", "test"]).unwrap();
        assert!(matches!(cli.command, Commands::Convert(_)));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["maemuki"]).is_err());
    }
}
