/// Risk classification for forecast days.
///
/// Submodules:
/// - `thresholds` — precipitation thresholds, `classify`, and alert banners.

pub mod thresholds;

pub use thresholds::{check_precipitation, classify, FloodAlert};
