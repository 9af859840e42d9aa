//! Rolling-window extremes over aligned columns.
//!
//! A window is only evaluated once it is full and every value in it is
//! defined; otherwise the output row is `None`.

use growth_core::traits::Column;

fn rolling_fold(data: &[Option<f64>], period: usize, fold: fn(f64, f64) -> f64, init: f64) -> Column {
    assert!(period > 0, "Period must be greater than 0");
    let mut result = vec![None; data.len()];
    if data.len() < period {
        return result;
    }

    for (i, window) in data.windows(period).enumerate() {
        result[i + period - 1] = window
            .iter()
            .try_fold(init, |acc, value| value.map(|v| fold(acc, v)));
    }

    result
}

/// Highest value in each trailing window.
pub fn rolling_max(data: &[Option<f64>], period: usize) -> Column {
    rolling_fold(data, period, f64::max, f64::NEG_INFINITY)
}

/// Lowest value in each trailing window.
pub fn rolling_min(data: &[Option<f64>], period: usize) -> Column {
    rolling_fold(data, period, f64::min, f64::INFINITY)
}

/// Offsets, counted back from the window end, of the most recent maximum
/// and most recent minimum of a window.
///
/// Scanning from the newest value with strict comparisons makes ties resolve
/// to the latest occurrence.
pub fn days_since_extremes(window: &[f64]) -> (usize, usize) {
    let mut max_at = 0;
    let mut min_at = 0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;

    for (offset, &value) in window.iter().rev().enumerate() {
        if value > max {
            max = value;
            max_at = offset;
        }
        if value < min {
            min = value;
            min_at = offset;
        }
    }

    (max_at, min_at)
}
