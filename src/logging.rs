/// Structured logging for the FloodLink dashboard
///
/// Provides context-rich logging tagged with the emitting component and an
/// optional context (usually a date), with timestamps and severity levels.
/// Supports console output and append-to-file logging.

use chrono::Utc;
use serde::Deserialize;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

use crate::model::RiskTier;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(s: String) -> Result<Self, String> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Generator,
    Classifier,
    Dashboard,
    Config,
    System,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Generator => write!(f, "GEN"),
            Component::Classifier => write!(f, "RISK"),
            Component::Dashboard => write!(f, "DASH"),
            Component::Config => write!(f, "CFG"),
            Component::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger, replacing any previous one
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        if let Ok(mut guard) = LOGGER.lock() {
            *guard = Some(logger);
        }
    }

    fn format_entry(level: LogLevel, component: Component, context: Option<&str>, message: &str) -> String {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let context_part = context.map(|c| format!(" [{}]", c)).unwrap_or_default();
        format!("{} {} {}{}: {}", timestamp, level, component, context_part, message)
    }

    fn log(&self, level: LogLevel, component: Component, context: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let log_entry = Self::format_entry(level, component, context, message);
        let context_part = context.map(|c| format!(" [{}]", c)).unwrap_or_default();

        // Console output goes to stderr so JSON on stdout stays parseable
        if self.console_timestamps {
            eprintln!("   {}", log_entry);
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", component, context_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", component, context_part, message),
                LogLevel::Info => eprintln!("   {}", message),
                LogLevel::Debug => eprintln!("   [DEBUG] {}{}: {}", component, context_part, message),
            }
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

fn dispatch(level: LogLevel, component: Component, context: Option<&str>, message: &str) {
    if let Ok(guard) = LOGGER.lock() {
        if let Some(logger) = guard.as_ref() {
            logger.log(level, component, context, message);
        }
    }
}

/// Log a general informational message
pub fn info(component: Component, context: Option<&str>, message: &str) {
    dispatch(LogLevel::Info, component, context, message);
}

/// Log a warning message
pub fn warn(component: Component, context: Option<&str>, message: &str) {
    dispatch(LogLevel::Warning, component, context, message);
}

/// Log an error message
pub fn error(component: Component, context: Option<&str>, message: &str) {
    dispatch(LogLevel::Error, component, context, message);
}

/// Log a debug message
pub fn debug(component: Component, context: Option<&str>, message: &str) {
    dispatch(LogLevel::Debug, component, context, message);
}

// ---------------------------------------------------------------------------
// Generation Summary Logging
// ---------------------------------------------------------------------------

/// Log how many forecast days landed in each tier.
///
/// Critical days are reported as a warning so they stand out in the log.
pub fn log_generation_summary(total: usize, counts: &[(RiskTier, usize)]) {
    let per_tier = counts
        .iter()
        .map(|(tier, n)| format!("{} {}", n, tier))
        .collect::<Vec<_>>()
        .join(", ");
    let message = format!("Forecast generated: {} days ({})", total, per_tier);

    let critical = counts
        .iter()
        .find(|(tier, _)| *tier == RiskTier::Critical)
        .map(|(_, n)| *n)
        .unwrap_or(0);

    if critical == 0 {
        info(Component::Generator, None, &message);
    } else {
        warn(Component::Generator, None, &message);
    }
}
