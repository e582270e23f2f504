//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --format json                                                      │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TIERCART_FORMAT=json                                               │
//! │     TIERCART_LOG_LEVEL=debug                                           │
//! │                                                                         │
//! │  3. TOML Config File (--config or TIERCART_CONFIG)                     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     text report, built-in bracket table                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! format = "text"       # text | json
//! log_level = "info"
//!
//! [pricing]
//! fallback_percent = 1
//!
//! [[pricing.brackets]]
//! above = 10
//! at_most = 20
//! rate = 20
//! category = "moderate"
//!
//! [[pricing.brackets]]
//! above = 20
//! rate = 30
//! category = "expensive"
//! ```
//!
//! Leaving out `[[pricing.brackets]]` keeps the built-in rules.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tiercart_core::{BracketTable, DiscountRate, PriceBracket};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

// =============================================================================
// Output Format
// =============================================================================

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `Total Amount: ...` report lines.
    #[default]
    Text,

    /// Pretty-printed JSON document.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Config {
                message: format!("Unknown output format: '{other}'. Valid options: text, json"),
            }),
        }
    }
}

// =============================================================================
// Pricing Settings
// =============================================================================

/// Bracket overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Percentage applied when no bracket matches.
    #[serde(default = "default_fallback_percent")]
    pub fallback_percent: u32,

    /// Replaces the built-in rules when present.
    #[serde(default)]
    pub brackets: Option<Vec<PriceBracket>>,
}

fn default_fallback_percent() -> u32 {
    BracketTable::default().fallback().percent()
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            fallback_percent: default_fallback_percent(),
            brackets: None,
        }
    }
}

impl PricingSettings {
    /// Builds the bracket table these settings describe.
    pub fn bracket_table(&self) -> CliResult<BracketTable> {
        let rules = match &self.brackets {
            Some(rules) => rules.clone(),
            None => BracketTable::default().rules().to_vec(),
        };
        let table = BracketTable::new(rules, DiscountRate::from_percent(self.fallback_percent))?;
        Ok(table)
    }
}

// =============================================================================
// App Configuration
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// `EnvFilter` directive used when neither RUST_LOG nor -v/-q is given.
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub pricing: PricingSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file, if a path was given
    /// 3. Environment variables
    ///
    /// A path that was given but does not exist is an error.
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides()?;

        // Fail early on a bad table rather than after reading input
        config.pricing.bracket_table()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|e| CliError::Config {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> CliResult<()> {
        if let Ok(format) = std::env::var("TIERCART_FORMAT") {
            debug!(format = %format, "Overriding output format from environment");
            self.format = format.parse()?;
        }

        if let Ok(level) = std::env::var("TIERCART_LOG_LEVEL") {
            if level.trim().is_empty() {
                warn!("Ignoring empty TIERCART_LOG_LEVEL");
            } else {
                self.log_level = Some(level);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiercart_core::{DiscountCategory, Money};

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.log_level.is_none());
        assert_eq!(config.pricing.bracket_table().unwrap(), BracketTable::default());
    }

    #[test]
    fn test_toml_brackets_replace_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            format = "json"

            [pricing]
            fallback_percent = 0

            [[pricing.brackets]]
            above = 20
            rate = 30
            category = "expensive"
            "#,
        )
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        let table = config.pricing.bracket_table().unwrap();
        assert_eq!(table.rules().len(), 1);
        assert_eq!(table.fallback(), DiscountRate::zero());
        assert_eq!(
            table.classify(Money::from_minor(25)),
            (DiscountRate::from_percent(30), DiscountCategory::Expensive)
        );
        assert_eq!(
            table.classify(Money::from_minor(15)),
            (DiscountRate::zero(), DiscountCategory::Uncategorized)
        );
    }

    #[test]
    fn test_fallback_only_override_keeps_default_rules() {
        let config: AppConfig = toml::from_str("[pricing]\nfallback_percent = 5\n").unwrap();
        let table = config.pricing.bracket_table().unwrap();
        assert_eq!(table.rules(), BracketTable::default().rules());
        assert_eq!(table.fallback().percent(), 5);
    }

    #[test]
    fn test_invalid_bracket_is_rejected() {
        let config: AppConfig = toml::from_str(
            "[[pricing.brackets]]\nabove = 0\nrate = 150\ncategory = \"cheap\"\n",
        )
        .unwrap();
        assert!(matches!(config.pricing.bracket_table(), Err(CliError::Core(_))));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/definitely/not/here/tiercart.toml")));
        assert!(matches!(result, Err(CliError::Config { .. })));
    }
}
