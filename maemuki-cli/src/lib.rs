//! Maemuki CLI library
//!
//! This library provides the command-line interface for the maemuki
//! positive text conversion engine.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
