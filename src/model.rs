/// Core data types for the FloodLink forecast.
///
/// This module defines the shared domain model imported by all other modules:
/// forecast samples, the generated series, risk tiers and their display
/// colors, and the error types. Apart from `chrono` dates and `serde`
/// derives it has no dependencies and does no I/O.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Forecast types
// ---------------------------------------------------------------------------

/// One day of the simulated forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSample {
    pub date: NaiveDate,
    /// Predicted precipitation, in millimetres.
    pub precipitation_mm: f64,
    /// Total column water vapor (TCWV), in kg/m². Display only.
    pub vapor_kgm2: f64,
}

/// The full generated forecast over `[start, end]`.
///
/// Built once by `forecast::generate` and never mutated afterwards.
/// Holds exactly one sample per calendar day, in chronological order,
/// so `samples[i].date == start + i days`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
    pub(crate) samples: Vec<ForecastSample>,
}

impl ForecastSeries {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn samples(&self) -> &[ForecastSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Never true for a series produced by `generate`; present for symmetry
    /// with `len`.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether `date` falls inside the forecast coverage window.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

// ---------------------------------------------------------------------------
// Risk types
// ---------------------------------------------------------------------------

/// Flood risk tiers, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Stable,
    Elevated,
    Critical,
}

/// Presentation color paired with each tier, used for the alert banner
/// and the map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TierColor {
    Green,
    Orange,
    Red,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Stable, RiskTier::Elevated, RiskTier::Critical];

    pub fn color(self) -> TierColor {
        match self {
            RiskTier::Stable => TierColor::Green,
            RiskTier::Elevated => TierColor::Orange,
            RiskTier::Critical => TierColor::Red,
        }
    }

    /// Banner text shown next to the headline metric.
    pub fn status_label(self) -> &'static str {
        match self {
            RiskTier::Stable => "STABLE / LOW RISK",
            RiskTier::Elevated => "ELEVATED WARNING",
            RiskTier::Critical => "CRITICAL FLOOD ALERT",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Stable => write!(f, "STABLE"),
            RiskTier::Elevated => write!(f, "ELEVATED"),
            RiskTier::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl TierColor {
    pub fn as_str(self) -> &'static str {
        match self {
            TierColor::Green => "green",
            TierColor::Orange => "orange",
            TierColor::Red => "red",
        }
    }
}

impl fmt::Display for TierColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while building the forecast. Both are startup
/// configuration errors; a date outside coverage is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The coverage window ends before it starts.
    InvalidRange { start: NaiveDate, end: NaiveDate },
    /// A rule constant is unusable (zero modulus, impossible day, ...).
    InvalidRules(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::InvalidRange { start, end } => {
                write!(f, "Invalid forecast range: end {} is before start {}", end, start)
            }
            ForecastError::InvalidRules(msg) => write!(f, "Invalid rule constants: {}", msg),
        }
    }
}

impl std::error::Error for ForecastError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_are_ordered_by_severity() {
        assert!(RiskTier::Stable < RiskTier::Elevated);
        assert!(RiskTier::Elevated < RiskTier::Critical);
        assert_eq!(RiskTier::ALL.iter().max(), Some(&RiskTier::Critical));
    }

    #[test]
    fn test_every_tier_has_a_distinct_color() {
        assert_eq!(RiskTier::Critical.color(), TierColor::Red);
        assert_eq!(RiskTier::Elevated.color(), TierColor::Orange);
        assert_eq!(RiskTier::Stable.color(), TierColor::Green);
    }

    #[test]
    fn test_status_labels_match_banner_text() {
        assert_eq!(RiskTier::Critical.status_label(), "CRITICAL FLOOD ALERT");
        assert_eq!(RiskTier::Elevated.status_label(), "ELEVATED WARNING");
        assert_eq!(RiskTier::Stable.status_label(), "STABLE / LOW RISK");
    }

    #[test]
    fn test_tier_serializes_in_upper_case() {
        let json = serde_json::to_string(&RiskTier::Elevated).expect("tier should serialize");
        assert_eq!(json, "\"ELEVATED\"");
        let json = serde_json::to_string(&TierColor::Orange).expect("color should serialize");
        assert_eq!(json, "\"orange\"");
    }

    #[test]
    fn test_invalid_range_error_names_both_dates() {
        let err = ForecastError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2026, 4, 30).unwrap(),
            end: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("2026-04-30"), "message was: {}", msg);
        assert!(msg.contains("2026-01-01"), "message was: {}", msg);
    }
}
