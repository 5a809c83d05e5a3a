/// Synthetic forecast generation and date lookup.
///
/// The forecast is a pure function of the calendar date and the rule
/// constants: no randomness, no I/O. Generating twice with the same
/// arguments yields identical series.

use chrono::{Datelike, NaiveDate};

use crate::alert::classify;
use crate::logging::{self, Component};
use crate::model::{ForecastError, ForecastSample, ForecastSeries, RiskTier};
use crate::rules::{EventWindow, RuleConstants};

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Builds one sample per calendar day from `start` to `end`, inclusive.
///
/// Fails fast if `end` is before `start` or the rule constants cannot be
/// evaluated; a single-day range is valid.
pub fn generate(
    start: NaiveDate,
    end: NaiveDate,
    rules: &RuleConstants,
) -> Result<ForecastSeries, ForecastError> {
    if end < start {
        return Err(ForecastError::InvalidRange { start, end });
    }
    rules.validate()?;

    for (kind, window) in rules.windows_with_kind() {
        if !window_overlaps(window, start, end) {
            logging::debug(
                Component::Generator,
                Some(window.display_name(kind)),
                &format!("window does not overlap {}..={}, contributes no samples", start, end),
            );
        }
    }

    let samples: Vec<ForecastSample> = start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| sample_for(date, rules))
        .collect();

    let series = ForecastSeries { start, end, samples };
    logging::log_generation_summary(series.len(), &series.tier_counts());
    Ok(series)
}

/// Evaluates the rules for a single day. First match wins.
pub fn sample_for(date: NaiveDate, rules: &RuleConstants) -> ForecastSample {
    if let Some(window) = rules.windows().find(|w| w.contains(date)) {
        return ForecastSample {
            date,
            precipitation_mm: window.precipitation_mm,
            vapor_kgm2: window.vapor_kgm2,
        };
    }

    let baseline = if date.month() >= rules.spring_start_month {
        &rules.spring
    } else {
        &rules.winter
    };
    ForecastSample {
        date,
        precipitation_mm: baseline.precipitation_for(date.day()),
        vapor_kgm2: baseline.vapor_for(date.day()),
    }
}

/// Whether any day of `window` falls inside `[start, end]`.
fn window_overlaps(window: &EventWindow, start: NaiveDate, end: NaiveDate) -> bool {
    (start.year()..=end.year()).any(|year| {
        let first = NaiveDate::from_ymd_opt(year, window.month, window.first_day);
        // Clamp the last day for short months, e.g. a "Feb 27-31" window
        let last = (window.first_day..=window.last_day)
            .rev()
            .find_map(|d| NaiveDate::from_ymd_opt(year, window.month, d));
        match (first, last) {
            (Some(first), Some(last)) => first <= end && last >= start,
            _ => false,
        }
    })
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Returns the sample for `date`, or `None` if it is outside the series.
///
/// Exact-date match only; there is no interpolation or nearest-day fallback.
pub fn lookup(series: &ForecastSeries, date: NaiveDate) -> Option<&ForecastSample> {
    series.lookup(date)
}

impl ForecastSeries {
    /// See [`lookup`].
    pub fn lookup(&self, date: NaiveDate) -> Option<&ForecastSample> {
        if !self.covers(date) {
            return None;
        }
        let offset = usize::try_from((date - self.start).num_days()).ok()?;
        self.samples.get(offset).filter(|s| s.date == date)
    }

    /// The wettest day, earliest on ties.
    pub fn peak(&self) -> Option<&ForecastSample> {
        self.samples.iter().fold(None, |best: Option<&ForecastSample>, s| match best {
            Some(b) if b.precipitation_mm >= s.precipitation_mm => Some(b),
            _ => Some(s),
        })
    }

    /// Number of days in each tier, in severity order.
    pub fn tier_counts(&self) -> Vec<(RiskTier, usize)> {
        RiskTier::ALL
            .iter()
            .map(|tier| {
                let n = self
                    .samples
                    .iter()
                    .filter(|s| classify(s.precipitation_mm) == *tier)
                    .count();
                (*tier, n)
            })
            .collect()
    }

    /// Dates classified CRITICAL, chronologically.
    pub fn critical_days(&self) -> Vec<NaiveDate> {
        self.samples
            .iter()
            .filter(|s| classify(s.precipitation_mm) == RiskTier::Critical)
            .map(|s| s.date)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
