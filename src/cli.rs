//! Command-line arguments for the `floodlink` dashboard.

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Output format for the selected day
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable dashboard
    Text,
    /// View model as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "floodlink")]
#[command(version, about = "Simulated flood-risk outlook for Stapleton, NYC")]
#[command(long_about = r#"
Generates the January-April flood outlook for the configured site and shows
the forecast for one selected day: predicted precipitation, water vapor,
risk tier, and the map marker styling.

Configuration is read from --config <path> or $FLOODLINK_CONFIG. Without
either, the built-in 2026 Stapleton defaults are used. A .env file in the
working directory is loaded first.

Example:
  floodlink --date 2026-03-15
  floodlink --date 2026-01-06 --format json
  floodlink --outlook
"#)]
pub struct Cli {
    /// Date to inspect (YYYY-MM-DD). Defaults to the start of coverage
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH", env = "FLOODLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Also print the full season outlook chart and summary
    #[arg(long)]
    pub outlook: bool,

    /// Minimum log level (debug, info, warn, error); overrides the config file
    #[arg(long, value_name = "LEVEL", env = "FLOODLINK_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["floodlink"]).expect("no arguments is valid");
        assert_eq!(cli.date, None);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.outlook);
    }

    #[test]
    fn test_date_and_format_parse() {
        let cli = Cli::try_parse_from(["floodlink", "--date", "2026-03-15", "--format", "json", "--outlook"])
            .expect("arguments should parse");
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2026, 3, 15));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.outlook);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        assert!(Cli::try_parse_from(["floodlink", "--date", "2026-02-30"]).is_err());
        assert!(Cli::try_parse_from(["floodlink", "--date", "tomorrow"]).is_err());
    }

    #[test]
    fn test_log_level_flag() {
        let cli = Cli::try_parse_from(["floodlink", "--log-level", "debug"]).expect("level should parse");
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }
}
