//! Verity CLI library.
//!
//! This library provides the core functionality for the `verity` command-line
//! interface: configuration management, command execution, result files and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod report;

pub use cli::{Cli, Command};
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
