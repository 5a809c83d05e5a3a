//! FloodLink: simulated flood-risk outlook for a single site.
//!
//! - `forecast` builds the deterministic daily series and looks days up.
//! - `alert` classifies a day's precipitation into a risk tier.
//! - `dashboard` turns a date selection into a view model and renders it.
//! - `config`, `rules` and `site` hold the tunable inputs.

pub mod alert;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod forecast;
pub mod logging;
pub mod model;
pub mod rules;
pub mod site;

pub use alert::classify;
pub use forecast::{generate, lookup};
pub use model::{ForecastError, ForecastSample, ForecastSeries, RiskTier, TierColor};
pub use rules::RuleConstants;
