/// Rule constants for the synthetic forecast.
///
/// Every window, offset and modulus the generator uses lives here, so the
/// forecast can be retuned from the config file without touching the
/// branching logic in `forecast`. The defaults reproduce the January–April
/// 2026 Stapleton outlook.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::ForecastError;

// ---------------------------------------------------------------------------
// Event windows
// ---------------------------------------------------------------------------

/// A fixed-value span of days within one month, e.g. March 14–17.
///
/// Days are day-of-month and inclusive at both ends. A window applies in
/// any year the coverage range reaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventWindow {
    /// Short description, used in log messages.
    #[serde(default)]
    pub label: String,
    pub month: u32,
    pub first_day: u32,
    pub last_day: u32,
    pub precipitation_mm: f64,
    pub vapor_kgm2: f64,
}

impl EventWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && (self.first_day..=self.last_day).contains(&date.day())
    }

    /// The label, or `kind` ("historical", "peak") when no label is set.
    pub fn display_name<'a>(&'a self, kind: &'a str) -> &'a str {
        if self.label.is_empty() { kind } else { self.label.as_str() }
    }

    fn validate(&self, kind: &str) -> Result<(), ForecastError> {
        let name = self.display_name(kind);
        if !(1..=12).contains(&self.month) {
            return Err(ForecastError::InvalidRules(format!(
                "{} window has month {}, expected 1-12",
                name, self.month
            )));
        }
        if !(1..=31).contains(&self.first_day) || !(1..=31).contains(&self.last_day) {
            return Err(ForecastError::InvalidRules(format!(
                "{} window days {}-{} must lie within 1-31",
                name, self.first_day, self.last_day
            )));
        }
        if self.first_day > self.last_day {
            return Err(ForecastError::InvalidRules(format!(
                "{} window starts on day {} after it ends on day {}",
                name, self.first_day, self.last_day
            )));
        }
        if !self.precipitation_mm.is_finite() || !self.vapor_kgm2.is_finite() {
            return Err(ForecastError::InvalidRules(format!(
                "{} window values must be finite",
                name
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Seasonal baselines
// ---------------------------------------------------------------------------

/// Baseline pattern for days outside every event window:
///   precipitation = precip_base + (day % precip_modulus)
///   vapor         = vapor_base  + (day % vapor_modulus)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub precip_base: f64,
    pub precip_modulus: u32,
    pub vapor_base: f64,
    pub vapor_modulus: u32,
}

impl Baseline {
    pub fn precipitation_for(&self, day_of_month: u32) -> f64 {
        self.precip_base + f64::from(day_of_month % self.precip_modulus)
    }

    pub fn vapor_for(&self, day_of_month: u32) -> f64 {
        self.vapor_base + f64::from(day_of_month % self.vapor_modulus)
    }

    fn validate(&self, kind: &str) -> Result<(), ForecastError> {
        if self.precip_modulus == 0 || self.vapor_modulus == 0 {
            return Err(ForecastError::InvalidRules(format!(
                "{} baseline modulus must be non-zero",
                kind
            )));
        }
        if !self.precip_base.is_finite() || !self.vapor_base.is_finite() {
            return Err(ForecastError::InvalidRules(format!(
                "{} baseline offsets must be finite",
                kind
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rule set
// ---------------------------------------------------------------------------

/// The complete rule set, evaluated by `forecast::generate` in this order:
///   1. `historical` windows (known past flood events)
///   2. `peaks` (seasonal peaks)
///   3. `spring` baseline, for months >= `spring_start_month`
///   4. `winter` baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConstants {
    pub historical: Vec<EventWindow>,
    pub peaks: Vec<EventWindow>,
    pub spring_start_month: u32,
    pub spring: Baseline,
    pub winter: Baseline,
}

impl Default for RuleConstants {
    fn default() -> Self {
        Self {
            historical: vec![EventWindow {
                label: "January 2026 proof event".to_string(),
                month: 1,
                first_day: 6,
                last_day: 7,
                precipitation_mm: 38.5,
                vapor_kgm2: 52.0,
            }],
            peaks: vec![
                EventWindow {
                    label: "Mid-March peak".to_string(),
                    month: 3,
                    first_day: 14,
                    last_day: 17,
                    precipitation_mm: 41.5,
                    vapor_kgm2: 58.0,
                },
                EventWindow {
                    label: "Late-April peak".to_string(),
                    month: 4,
                    first_day: 20,
                    last_day: 23,
                    precipitation_mm: 38.2,
                    vapor_kgm2: 55.0,
                },
            ],
            spring_start_month: 3,
            spring: Baseline {
                precip_base: 18.0,
                precip_modulus: 10,
                vapor_base: 28.0,
                vapor_modulus: 4,
            },
            winter: Baseline {
                precip_base: 12.0,
                precip_modulus: 5,
                vapor_base: 20.0,
                vapor_modulus: 3,
            },
        }
    }
}

impl RuleConstants {
    /// Rejects constants the generator cannot evaluate.
    pub fn validate(&self) -> Result<(), ForecastError> {
        for window in &self.historical {
            window.validate("historical")?;
        }
        for window in &self.peaks {
            window.validate("peak")?;
        }
        if !(1..=12).contains(&self.spring_start_month) {
            return Err(ForecastError::InvalidRules(format!(
                "spring_start_month is {}, expected 1-12",
                self.spring_start_month
            )));
        }
        self.spring.validate("spring")?;
        self.winter.validate("winter")?;
        Ok(())
    }

    /// All windows in evaluation order.
    pub fn windows(&self) -> impl Iterator<Item = &EventWindow> {
        self.historical.iter().chain(self.peaks.iter())
    }

    /// All windows in evaluation order, paired with their kind.
    pub fn windows_with_kind(&self) -> impl Iterator<Item = (&'static str, &EventWindow)> {
        self.historical
            .iter()
            .map(|w| ("historical", w))
            .chain(self.peaks.iter().map(|w| ("peak", w)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
