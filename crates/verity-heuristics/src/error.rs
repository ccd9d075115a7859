//! Heuristics error types

use thiserror::Error;

/// Errors that can occur while building the heuristic engine
///
/// Classification and scoring themselves never fail; every error here comes
/// from loading or validating configuration.
#[derive(Error, Debug)]
pub enum HeuristicsError {
    /// A configured pattern is not a valid regular expression
    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern {
        /// Offending pattern source
        pattern: String,
        /// Compiler message
        message: String,
    },

    /// Configuration is structurally invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
