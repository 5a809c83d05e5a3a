/// Forecast site metadata.
///
/// The dashboard covers a single fixed location. Its coordinates and the
/// radius of the map marker are display data only; nothing in the forecast
/// depends on them.

use serde::{Deserialize, Serialize};

/// A monitored location and how its map marker is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    /// Human-readable description of why the site is monitored.
    #[serde(default)]
    pub description: String,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Radius of the impact circle drawn on the map, in metres.
    pub radius_m: f64,
}

/// Stapleton waterfront, Staten Island, NYC.
pub const STAPLETON_NAME: &str = "Stapleton, Staten Island, NYC";
pub const STAPLETON_LATITUDE: f64 = 40.6267;
pub const STAPLETON_LONGITUDE: f64 = -74.0755;
pub const STAPLETON_RADIUS_M: f64 = 900.0;

impl Default for Site {
    fn default() -> Self {
        Self {
            name: STAPLETON_NAME.to_string(),
            description: "Low-lying waterfront neighborhood on the North Shore. \
                          Pluvial flooding follows sustained heavy rainfall."
                .to_string(),
            latitude: STAPLETON_LATITUDE,
            longitude: STAPLETON_LONGITUDE,
            radius_m: STAPLETON_RADIUS_M,
        }
    }
}

impl Site {
    /// Rejects coordinates that cannot be drawn.
    pub fn validate(&self) -> Result<(), String> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(format!("latitude {} for '{}' is out of range", self.latitude, self.name));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(format!("longitude {} for '{}' is out of range", self.longitude, self.name));
        }
        if !(self.radius_m.is_finite() && self.radius_m > 0.0) {
            return Err(format!("marker radius for '{}' must be positive", self.name));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
