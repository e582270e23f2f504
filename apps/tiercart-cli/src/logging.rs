//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `tiercart-core` only emits
//! events. Logs go to stderr so stdout carries nothing but the report.
//!
//! # Level selection
//!
//! | Source                    | Wins over            |
//! |---------------------------|----------------------|
//! | `RUST_LOG`                | everything           |
//! | `-q` / `-v`, `-vv`, `-vvv`| config, default      |
//! | `log_level` in config     | default              |
//! | default                   | WARN                 |

use std::io::IsTerminal as _;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{CliError, CliResult};

/// Installs the global subscriber. Call once, before any events fire.
pub fn init_logging(verbose: u8, quiet: bool, config_level: Option<&str>) -> CliResult<()> {
    let level = derive_level(verbose, quiet, config_level);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("tiercart={level},tiercart_core={level}")))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn derive_level(verbose: u8, quiet: bool, config_level: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => config_level.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_default() {
        assert_eq!(derive_level(0, false, None), "warn");
    }

    #[test]
    fn level_from_config() {
        assert_eq!(derive_level(0, false, Some("debug")), "debug");
    }

    #[test]
    fn flags_override_config() {
        assert_eq!(derive_level(1, false, Some("error")), "info");
        assert_eq!(derive_level(0, true, Some("trace")), "error");
    }

    #[test]
    fn level_verbose_three_plus() {
        assert_eq!(derive_level(3, false, None), "trace");
        assert_eq!(derive_level(9, false, None), "trace");
    }
}
