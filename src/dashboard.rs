//! Dashboard view model and text rendering.
//!
//! `on_date_selected` is the event handler for one date-picker selection:
//! it takes the already-generated series and the chosen date and produces
//! everything a renderer needs for that day. The series is never
//! regenerated per selection.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

use crate::alert::thresholds::{check_precipitation, CRITICAL_PRECIP_MM};
use crate::logging::{self, Component};
use crate::model::{ForecastSeries, RiskTier, TierColor};
use crate::site::Site;

/// Line color for the forecast series on the season chart.
pub const FORECAST_LINE_COLOR: &str = "#29b5e8";
/// Line color for the danger threshold on the season chart.
pub const DANGER_LINE_COLOR: &str = "#ff0000";

// ---------------------------------------------------------------------------
// View model
// ---------------------------------------------------------------------------

/// The impact circle drawn at the site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: f64,
    pub color: TierColor,
    pub tooltip: String,
}

/// Headline metrics and styling for a covered day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub precipitation_mm: f64,
    pub vapor_kgm2: f64,
    pub tier: RiskTier,
    pub status: String,
    pub color: TierColor,
    pub marker: MapMarker,
}

/// Result of a date selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionView {
    Covered(DayReport),
    /// The selected date has no forecast. Renderers must say so rather than
    /// show zeros or a previous day's values.
    OutOfCoverage {
        date: NaiveDate,
        coverage_start: NaiveDate,
        coverage_end: NaiveDate,
    },
}

/// One point of the season outlook chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub predicted_precip: f64,
    pub danger_line: f64,
}

// ---------------------------------------------------------------------------
// Event handling
// ---------------------------------------------------------------------------

/// Handles a date selection.
pub fn on_date_selected(series: &ForecastSeries, site: &Site, date: NaiveDate) -> SelectionView {
    let Some(sample) = series.lookup(date) else {
        let date_str = date.to_string();
        logging::warn(
            Component::Dashboard,
            Some(date_str.as_str()),
            &format!(
                "date outside forecast coverage ({} to {})",
                series.start(),
                series.end()
            ),
        );
        return SelectionView::OutOfCoverage {
            date,
            coverage_start: series.start(),
            coverage_end: series.end(),
        };
    };

    let alert = check_precipitation(sample);
    let date_str = date.to_string();
    logging::debug(Component::Classifier, Some(date_str.as_str()), &alert.message);

    let status = alert.tier.status_label().to_string();
    SelectionView::Covered(DayReport {
        date,
        precipitation_mm: sample.precipitation_mm,
        vapor_kgm2: sample.vapor_kgm2,
        tier: alert.tier,
        color: alert.color,
        marker: MapMarker {
            latitude: site.latitude,
            longitude: site.longitude,
            radius_m: site.radius_m,
            color: alert.color,
            tooltip: format!("Alert: {}", status),
        },
        status,
    })
}

/// The full-season chart data, with the constant danger line.
pub fn season_outlook(series: &ForecastSeries) -> Vec<ChartPoint> {
    series
        .samples()
        .iter()
        .map(|s| ChartPoint {
            date: s.date,
            predicted_precip: s.precipitation_mm,
            danger_line: CRITICAL_PRECIP_MM,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Text rendering
// ---------------------------------------------------------------------------

/// Page header: title, site and coverage window.
pub fn render_header(series: &ForecastSeries, site: &Site) -> String {
    format!(
        "FloodLink: Strategic Flood Forecast\n\
         Site: {} ({:.4}, {:.4})\n\
         {}\
         Coverage: {} – {}\n",
        site.name,
        site.latitude,
        site.longitude,
        if site.description.is_empty() {
            String::new()
        } else {
            format!("{}\n", site.description)
        },
        series.start().format("%B %-d, %Y"),
        series.end().format("%B %-d, %Y"),
    )
}

/// Renders a selection as plain text.
pub fn render_selection(view: &SelectionView) -> String {
    let mut out = String::new();
    match view {
        SelectionView::Covered(report) => {
            let _ = writeln!(out, "Date: {}", report.date);
            let _ = writeln!(out, "Predicted Weekly Saturation: {:.1} mm", report.precipitation_mm);
            let _ = writeln!(out, "Atmospheric Fuel (TCWV): {:.1} kg/m²", report.vapor_kgm2);
            let _ = writeln!(out, "Status: {} [{}]", report.status, report.color);
            let _ = writeln!(
                out,
                "Map: {}m circle at ({:.4}, {:.4}), {} – {}",
                report.marker.radius_m,
                report.marker.latitude,
                report.marker.longitude,
                report.marker.color,
                report.marker.tooltip
            );
        }
        SelectionView::OutOfCoverage { date, coverage_start, coverage_end } => {
            let _ = writeln!(
                out,
                "{} is outside forecast coverage ({} to {}). No forecast is available for this date.",
                date, coverage_start, coverage_end
            );
        }
    }
    out
}

/// Widest bar in the outlook, as a multiple of the danger line column.
const OUTLOOK_MAX_WIDTH_FACTOR: usize = 2;

/// Renders the season outlook as a table, one row per day, with a bar
/// scaled to the precipitation and a marker column at the danger line.
///
/// Bars are capped at twice the danger line; a capped bar ends in `>`.
pub fn render_outlook(series: &ForecastSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Season Outlook (danger line: {:.1} mm)", CRITICAL_PRECIP_MM);
    for point in season_outlook(series) {
        let danger = point.danger_line.round() as usize;
        let cap = danger * OUTLOOK_MAX_WIDTH_FACTOR;
        let raw_width = point.predicted_precip.max(0.0).round();
        let overflow = raw_width > cap as f64;
        let width = if overflow { cap } else { raw_width as usize };
        let mut bar: String = (0..=width.max(danger))
            .map(|i| match i {
                _ if i == danger => '|',
                _ if i < width => '#',
                _ => ' ',
            })
            .collect();
        if overflow {
            bar = bar.trim_end().to_string();
            bar.push('>');
        }
        let _ = writeln!(
            out,
            "{}  {:>5.1}  {}",
            point.date,
            point.predicted_precip,
            bar.trim_end()
        );
    }
    let _ = writeln!(
        out,
        "#: forecast rain | '|': {:.0} mm flood threshold | '>': off scale",
        CRITICAL_PRECIP_MM
    );
    out
}

/// Season summary: peak day and days per tier.
pub fn render_summary(series: &ForecastSeries) -> String {
    let mut out = String::new();
    if let Some(peak) = series.peak() {
        let _ = writeln!(out, "Season peak: {:.1} mm on {}", peak.precipitation_mm, peak.date);
    }
    for (tier, n) in series.tier_counts() {
        let _ = writeln!(out, "  {:<9} {:>3} days", tier.to_string(), n);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::generate;
    use crate::rules::RuleConstants;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn season() -> ForecastSeries {
        generate(ymd(2026, 1, 1), ymd(2026, 4, 30), &RuleConstants::default())
            .expect("default season should generate")
    }

    #[test]
    fn test_covered_day_report() {
        let view = on_date_selected(&season(), &Site::default(), ymd(2026, 1, 6));
        let SelectionView::Covered(report) = view else {
            panic!("2026-01-06 is in coverage");
        };
        assert_eq!(report.precipitation_mm, 38.5);
        assert_eq!(report.tier, RiskTier::Critical);
        assert_eq!(report.status, "CRITICAL FLOOD ALERT");
        assert_eq!(report.marker.color, TierColor::Red);
        assert_eq!(report.marker.tooltip, "Alert: CRITICAL FLOOD ALERT");
        assert_eq!(report.marker.radius_m, 900.0);
    }

    #[test]
    fn test_out_of_coverage_view() {
        let view = on_date_selected(&season(), &Site::default(), ymd(2026, 5, 1));
        assert_eq!(
            view,
            SelectionView::OutOfCoverage {
                date: ymd(2026, 5, 1),
                coverage_start: ymd(2026, 1, 1),
                coverage_end: ymd(2026, 4, 30),
            }
        );
    }

    #[test]
    fn test_out_of_coverage_rendering_has_no_placeholder_metrics() {
        let view = on_date_selected(&season(), &Site::default(), ymd(2026, 5, 1));
        let text = render_selection(&view);
        assert!(text.contains("outside forecast coverage"), "text was: {}", text);
        assert!(!text.contains("mm"), "no metric should be shown: {}", text);
        assert!(!text.contains("0.0"), "no zero placeholder should be shown: {}", text);
    }

    #[test]
    fn test_covered_rendering_shows_headline_and_banner() {
        let view = on_date_selected(&season(), &Site::default(), ymd(2026, 3, 20));
        let text = render_selection(&view);
        // Spring baseline: 18 + 20 % 10 = 18.0, vapor 28 + 20 % 4 = 28.0
        assert!(text.contains("Predicted Weekly Saturation: 18.0 mm"), "text was: {}", text);
        assert!(text.contains("Atmospheric Fuel (TCWV): 28.0"), "text was: {}", text);
        assert!(text.contains("Status: STABLE / LOW RISK [green]"), "text was: {}", text);
    }

    #[test]
    fn test_outlook_has_constant_danger_line() {
        let series = season();
        let points = season_outlook(&series);
        assert_eq!(points.len(), series.len());
        assert!(points.iter().all(|p| p.danger_line == 35.0));
        assert_eq!(points[0].date, ymd(2026, 1, 1));
    }

    #[test]
    fn test_outlook_rendering_one_row_per_day() {
        let series = season();
        let text = render_outlook(&series);
        let rows = text.lines().filter(|l| l.starts_with("2026-")).count();
        assert_eq!(rows, 120);
        let march_peak = text
            .lines()
            .find(|l| l.starts_with("2026-03-15"))
            .expect("peak row should exist");
        assert!(march_peak.contains("41.5"));
        assert!(march_peak.contains('|'));
    }

    #[test]
    fn test_header_names_site_and_coverage() {
        let header = render_header(&season(), &Site::default());
        assert!(header.contains("Stapleton"));
        assert!(header.contains("January 1, 2026"));
        assert!(header.contains("April 30, 2026"));
        assert!(header.contains("Low-lying waterfront neighborhood"), "header was: {}", header);
    }

    #[test]
    fn test_header_skips_empty_description() {
        let mut site = Site::default();
        site.description.clear();
        let header = render_header(&season(), &site);
        assert_eq!(header.lines().count(), 3, "header was: {}", header);
        assert!(header.lines().all(|l| !l.trim().is_empty()));
    }

    #[test]
    fn test_outlook_caps_extreme_precipitation() {
        let mut rules = RuleConstants::default();
        rules.peaks[0].precipitation_mm = 1.0e12;
        rules.validate().expect("finite window values are valid");
        let series = generate(ymd(2026, 3, 1), ymd(2026, 3, 31), &rules)
            .expect("March should generate");

        let text = render_outlook(&series);
        let longest = text.lines().map(str::len).max().unwrap_or(0);
        assert!(longest < 200, "longest outlook row is {} bytes", longest);

        let capped = text
            .lines()
            .find(|l| l.starts_with("2026-03-15"))
            .expect("peak row should exist");
        assert!(capped.ends_with('>'), "row was: {}", capped);
        assert!(capped.contains('|'));

        let normal = text
            .lines()
            .find(|l| l.starts_with("2026-03-20"))
            .expect("baseline row should exist");
        assert!(!normal.ends_with('>'), "row was: {}", normal);
    }

    #[test]
    fn test_selection_serializes_with_kind_tag() {
        let view = on_date_selected(&season(), &Site::default(), ymd(2026, 5, 1));
        let json = serde_json::to_value(&view).expect("view should serialize");
        assert_eq!(json["kind"], "out_of_coverage");
        assert_eq!(json["coverage_end"], "2026-04-30");

        let view = on_date_selected(&season(), &Site::default(), ymd(2026, 3, 15));
        let json = serde_json::to_value(&view).expect("view should serialize");
        assert_eq!(json["kind"], "covered");
        assert_eq!(json["tier"], "CRITICAL");
        assert_eq!(json["color"], "red");
        assert_eq!(json["precipitation_mm"], 41.5);
    }
}
