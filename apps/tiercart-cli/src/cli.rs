//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::OutputFormat;

/// Prices a cart read from order lines and prints the discount report.
#[derive(Debug, Parser)]
#[command(
    name = "tiercart",
    version = env!("CARGO_PKG_VERSION"),
    about = "Cart aggregation with tiered category discounts",
    after_help = "INPUT:\n\
        \x20 First line: number of order lines N\n\
        \x20 Next N lines: <orderIndex> <price>\n\n\
        EXAMPLE:\n\
        \x20 printf '2\\n1 30\\n2 5\\n' | tiercart"
)]
pub struct Cli {
    /// Read order lines from this file instead of stdin.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Configuration file path.
    #[arg(short = 'c', long = "config", value_name = "FILE", env = "TIERCART_CONFIG")]
    pub config: Option<PathBuf>,

    /// Report format. Overrides the config file and TIERCART_FORMAT.
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from(["tiercart", "-vv", "--format", "json", "-i", "orders.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.input, Some(PathBuf::from("orders.txt")));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["tiercart", "-q", "-v"]).is_err());
    }
}
