//! Histogram analysis helpers.

use super::types::{Histogram, HistogramPoint};

/// Milliseconds per day; histogram timestamps are epoch milliseconds.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

const YEAR_MS: i64 = 365 * MS_PER_DAY;
const GROWTH_WINDOW_MS: i64 = 90 * MS_PER_DAY;

fn sorted_desc(histograms: &[Histogram], series: &str) -> Vec<HistogramPoint> {
    let mut points: Vec<HistogramPoint> = histograms
        .iter()
        .find(|h| h.histogram_type == series)
        .map(|h| h.histogram_points.clone())
        .unwrap_or_default();
    points.sort_by_key(|p| std::cmp::Reverse(p.epoch_time));
    points
}

/// Newest value of a series; 0.0 when the series is missing or empty.
pub fn latest_value(histograms: &[Histogram], series: &str) -> f64 {
    sorted_desc(histograms, series)
        .first()
        .map(|p| p.value)
        .unwrap_or(0.0)
}

/// Year-over-year growth of a series in percent, rounded to one decimal.
///
/// Compares the newest point against the newest point lying within 90 days
/// of one year earlier; 0.0 when no such point exists (or the series has
/// fewer than two points).
pub fn annual_growth(histograms: &[Histogram], series: &str) -> f64 {
    let points = sorted_desc(histograms, series);
    if points.len() < 2 {
        return 0.0;
    }

    let latest = points[0];
    let one_year_ago = latest.epoch_time - YEAR_MS;
    let Some(reference) = points
        .iter()
        .find(|p| (p.epoch_time - one_year_ago).abs() < GROWTH_WINDOW_MS)
    else {
        return 0.0;
    };
    if reference.value == 0.0 {
        return 0.0;
    }

    let growth = (latest.value - reference.value) / reference.value * 100.0;
    (growth * 10.0).round() / 10.0
}
