//! Convert command implementation

use anyhow::{Context, Result};
use clap::Args;
use maemuki_core::ConversionEngine;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use crate::input::{resolve_patterns, FileReader};
use crate::output::{ConversionRecord, JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Text to convert (reads stdin when neither this nor --input is given)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Custom rules file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Converted text, one record per line
    Text,
    /// JSON array of records with statistics
    Json,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        let engine = self.build_engine()?;
        let sources = self.gather_sources()?;
        let mut formatter = self.build_formatter()?;

        for (source, original) in &sources {
            let converted = engine.convert(original);
            log::debug!("converted {} chars from {source}", original.chars().count());
            formatter.format_record(&ConversionRecord::new(source, original, &converted))?;
        }

        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }

    fn build_engine(&self) -> Result<ConversionEngine> {
        match &self.rules {
            Some(path) => ConversionEngine::from_rules_file(path)
                .with_context(|| format!("Failed to load rules from {}", path.display())),
            None => ConversionEngine::new().context("Failed to load built-in rules"),
        }
    }

    /// Collect `(source, text)` pairs from --text, input files, or stdin.
    fn gather_sources(&self) -> Result<Vec<(String, String)>> {
        let mut sources = Vec::new();

        if let Some(text) = &self.text {
            sources.push(("arg".to_string(), text.clone()));
        }

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                let content = FileReader::read_text(&path)?;
                sources.push((path.display().to_string(), trim_trailing_newline(&content)));
            }
        }

        if sources.is_empty() {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            sources.push(("stdin".to_string(), trim_trailing_newline(&buffer)));
        }

        Ok(sources)
    }

    fn build_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }
}

/// Strip one trailing line break, which would otherwise sit between the
/// text and the appended emphasis mark.
fn trim_trailing_newline(text: &str) -> String {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
        .to_string()
}
