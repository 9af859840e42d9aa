//! Daily price history sources.

mod csv_source;
mod yahoo;

pub use csv_source::CsvDataSource;
pub use yahoo::{YahooDataSource, DEFAULT_BASE_URL};

use growth_core::types::Bar;
use tracing::warn;

/// Sort bars by timestamp and drop bars whose UTC calendar date repeats,
/// keeping the earliest bar of each day.
///
/// Returns the number of bars dropped.
pub(crate) fn normalize_bars(symbol: &str, bars: &mut Vec<Bar>) -> usize {
    bars.sort_by_key(|b| b.timestamp);
    let before = bars.len();
    bars.dedup_by_key(|b| b.date());
    let dropped = before - bars.len();
    if dropped > 0 {
        warn!("{}: dropped {} bars with a repeated date", symbol, dropped);
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: i64 = 86_400_000;

    #[test]
    fn test_normalize_bars() {
        let mut bars = vec![
            Bar::new(3 * DAY_MS, 1.0, 1.0, 1.0, 3.0, 0.0),
            Bar::new(DAY_MS, 1.0, 1.0, 1.0, 1.0, 0.0),
            Bar::new(3 * DAY_MS, 1.0, 1.0, 1.0, 3.5, 0.0),
            Bar::new(2 * DAY_MS, 1.0, 1.0, 1.0, 2.0, 0.0),
        ];

        assert_eq!(normalize_bars("T", &mut bars), 1);
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_normalize_bars_same_day_different_time() {
        // Daily bar at 14:30 UTC plus a late intraday snapshot of the same day
        let open_time = 19_000 * DAY_MS + 52_200_000;
        let mut bars = vec![
            Bar::new(open_time + DAY_MS, 1.0, 1.0, 1.0, 2.0, 0.0),
            Bar::new(open_time + 20_000_000, 1.0, 1.0, 1.0, 1.5, 0.0),
            Bar::new(open_time, 1.0, 1.0, 1.0, 1.0, 0.0),
        ];

        assert_eq!(normalize_bars("T", &mut bars), 1);
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![1.0, 2.0]);
    }
}
