/// Dashboard configuration.
///
/// Loaded once at startup from an optional TOML file. Every section is
/// optional and falls back to the January–April 2026 Stapleton defaults,
/// so an empty file is a valid configuration.
///
/// ```toml
/// [coverage]
/// start = "2026-01-01"
/// end = "2026-04-30"
///
/// [logging]
/// level = "debug"
///
/// [rules.spring]
/// precip_base = 18.0
/// precip_modulus = 8
/// vapor_base = 30.0
/// vapor_modulus = 5
/// ```

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::logging::LogLevel;
use crate::model::ForecastError;
use crate::rules::RuleConstants;
use crate::site::Site;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// The forecast coverage window, inclusive at both ends.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Coverage {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub const DEFAULT_COVERAGE_START: (i32, u32, u32) = (2026, 1, 1);
pub const DEFAULT_COVERAGE_END: (i32, u32, u32) = (2026, 4, 30);

impl Default for Coverage {
    fn default() -> Self {
        let (sy, sm, sd) = DEFAULT_COVERAGE_START;
        let (ey, em, ed) = DEFAULT_COVERAGE_END;
        Self {
            start: NaiveDate::from_ymd_opt(sy, sm, sd).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(ey, em, ed).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: None,
            timestamps: false,
        }
    }
}

/// Full configuration file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub coverage: Coverage,
    pub site: Site,
    pub logging: LoggingConfig,
    pub rules: RuleConstants,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io { path: String, source: std::io::Error },
    /// The file is not valid TOML or does not match the expected shape.
    Parse(String),
    /// The file parsed but describes an unusable forecast.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => write!(f, "Cannot read config {}: {}", path, source),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ForecastError> for ConfigError {
    fn from(err: ForecastError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    /// Reads, parses and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates config text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a reversed coverage window, unusable rules, or an undrawable site.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.coverage.end < self.coverage.start {
            return Err(ForecastError::InvalidRange {
                start: self.coverage.start,
                end: self.coverage.end,
            }
            .into());
        }
        self.rules.validate()?;
        self.site.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
