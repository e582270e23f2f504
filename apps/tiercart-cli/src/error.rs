//! # CLI Error Types
//!
//! Everything that can stop a run, mapped to a process exit code.
//!
//! | Code | Meaning                                        |
//! |------|------------------------------------------------|
//! |  0   | Success                                        |
//! |  1   | I/O or internal failure                        |
//! |  2   | Malformed order input, amount overflow, or a   |
//! |      | command-line usage error reported by clap      |
//! |  4   | Invalid configuration                          |
//!
//! Usage errors never reach [`CliError`]: `Cli::parse` prints them and
//! exits with clap's own code 2.

use thiserror::Error;
use tiercart_core::CoreError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of order input could not be used.
    ///
    /// `line` is 1-based and counts the item-count line.
    #[error("Invalid input on line {line}: {reason}")]
    Input { line: usize, reason: String },

    /// The config file or an environment override is unusable.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A configured bracket table failed validation, or pricing overflowed.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),

    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config {
            message: err.to_string(),
        }
    }
}

impl CliError {
    pub fn input(line: usize, reason: impl Into<String>) -> Self {
        CliError::Input {
            line,
            reason: reason.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Input { .. } | CliError::Core(CoreError::AmountOverflow { .. }) => 2,
            CliError::Config { .. } | CliError::Core(_) => 4,
            CliError::Io(_) | CliError::Logging(_) | CliError::Encode(_) => 1,
        }
    }
}
