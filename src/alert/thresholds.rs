//! Precipitation threshold checking.
//!
//! Maps one day's forecast precipitation to a `RiskTier`. Vapor (TCWV) is
//! deliberately not consulted: it is a displayed metric only.

use crate::model::{ForecastSample, RiskTier, TierColor};

/// Precipitation at or above which a day is CRITICAL, in mm. Also drawn as
/// the danger line on the season outlook.
pub const CRITICAL_PRECIP_MM: f64 = 35.0;

/// Precipitation at or above which a day is ELEVATED, in mm.
pub const ELEVATED_PRECIP_MM: f64 = 22.0;

/// A flood alert for a single forecast day.
#[derive(Debug, Clone, PartialEq)]
pub struct FloodAlert {
    pub tier: RiskTier,
    pub color: TierColor,
    pub message: String,
}

/// Classifies a precipitation value.
///
/// Each tier is closed on its lower bound:
///   p >= 35.0        →  Critical
///   22.0 <= p < 35.0 →  Elevated
///   p < 22.0         →  Stable
///
/// NaN meets no threshold and therefore classifies as Stable.
pub fn classify(precipitation_mm: f64) -> RiskTier {
    if precipitation_mm >= CRITICAL_PRECIP_MM {
        RiskTier::Critical
    } else if precipitation_mm >= ELEVATED_PRECIP_MM {
        RiskTier::Elevated
    } else {
        RiskTier::Stable
    }
}

/// Builds the alert banner for a forecast day.
pub fn check_precipitation(sample: &ForecastSample) -> FloodAlert {
    let tier = classify(sample.precipitation_mm);
    FloodAlert {
        tier,
        color: tier.color(),
        message: format!(
            "{}: {:.1} mm forecast for {}",
            tier.status_label(),
            sample.precipitation_mm,
            sample.date
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
