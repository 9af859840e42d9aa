//! Momentum indicators.

use growth_core::traits::{BarIndicator, Column, Indicator};
use growth_core::types::Bar;
use serde::{Deserialize, Serialize};

use crate::moving_average::{Ema, Sma};
use crate::rolling::{rolling_max, rolling_min};
use crate::{defined, lift, simd};

/// Every column the RSI stage produces, aligned with the input bars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RsiColumns {
    /// Intraday percent change
    pub pct_change: Column,
    /// Percent change where positive, else zero
    pub day_gain: Column,
    /// Percent change where negative (sign kept), else zero
    pub day_loss: Column,
    /// Simple mean of `day_gain` over the period (>= 0)
    pub avg_gain: Column,
    /// Simple mean of `day_loss` over the period (<= 0)
    pub avg_loss: Column,
    /// Relative strength index
    pub rsi: Column,
}

/// Relative Strength Index (RSI) on intraday moves.
///
/// Gains and losses come from each day's open-to-close percent change and
/// are averaged with a plain SMA. Losses keep their negative sign, so the
/// index is `100 - 100 / (1 - avg_gain / avg_loss)`, which equals the usual
/// `100 - 100 / (1 + RS)` with `RS = avg_gain / |avg_loss|`.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// RSI from signed average gain and loss.
    ///
    /// A window without losses pins the index at 100; a window with neither
    /// gains nor losses is 0/0 and stays undefined.
    pub fn from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
        if avg_loss == 0.0 {
            return (avg_gain > 0.0).then_some(100.0);
        }
        defined(100.0 - 100.0 / (1.0 - avg_gain / avg_loss))
    }

    /// Calculate the RSI together with its intermediate columns.
    pub fn calculate_columns(&self, bars: &[Bar]) -> RsiColumns {
        let open: Vec<f64> = bars.iter().map(|b| b.open).collect();
        let close: Vec<f64> = bars.iter().map(|b| b.close).collect();

        let pct_change = simd::pct_change_simd(&open, &close);
        let (gains, losses) = simd::split_gains_losses(&pct_change);

        let day_gain = lift(&gains);
        let day_loss = lift(&losses);

        let sma = Sma::new(self.period);
        let avg_gain = sma.calculate_column(&day_gain);
        let avg_loss = sma.calculate_column(&day_loss);

        let rsi = avg_gain
            .iter()
            .zip(avg_loss.iter())
            .map(|(gain, loss)| match (gain, loss) {
                (Some(gain), Some(loss)) => Self::from_averages(*gain, *loss),
                _ => None,
            })
            .collect();

        RsiColumns {
            pct_change: lift(&pct_change),
            day_gain,
            day_loss,
            avg_gain,
            avg_loss,
            rsi,
        }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(14)
    }
}

impl BarIndicator for Rsi {
    fn calculate_bars(&self, bars: &[Bar]) -> Column {
        self.calculate_columns(bars).rsi
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// Stochastic oscillator applied to an RSI column.
///
/// `(rsi - min(rsi)) / (max(rsi) - min(rsi))` over the trailing period.
/// Undefined while any RSI in the window is undefined, and when the RSI is
/// flat across the window.
#[derive(Debug, Clone)]
pub struct StochRsi {
    period: usize,
}

impl StochRsi {
    /// Create a new stochastic RSI over `period` RSI values.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Calculate from an already computed RSI column.
    pub fn calculate_column(&self, rsi: &[Option<f64>]) -> Column {
        let highest = rolling_max(rsi, self.period);
        let lowest = rolling_min(rsi, self.period);

        rsi.iter()
            .zip(highest.iter().zip(lowest.iter()))
            .map(|(value, (high, low))| match (value, high, low) {
                (Some(value), Some(high), Some(low)) if high > low => {
                    defined((value - low) / (high - low))
                }
                _ => None,
            })
            .collect()
    }
}

impl Default for StochRsi {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for StochRsi {
    /// Treats the input as an RSI column.
    fn calculate(&self, data: &[f64]) -> Column {
        self.calculate_column(&lift(data))
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "StochRSI"
    }
}

/// MACD line: fast EMA minus slow EMA of the close.
///
/// Both EMAs are seeded at the first close, so the line is defined from the
/// first row on.
#[derive(Debug, Clone)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    fast_period: usize,
    slow_period: usize,
}

impl Macd {
    /// Create a MACD with the default spans (12, 24).
    pub fn new() -> Self {
        Self::with_periods(12, 24)
    }

    /// Create a MACD with custom spans.
    pub fn with_periods(fast: usize, slow: usize) -> Self {
        assert!(fast > 0 && slow > 0);
        assert!(fast < slow, "Fast period must be less than slow period");
        Self {
            fast: Ema::new(fast),
            slow: Ema::new(slow),
            fast_period: fast,
            slow_period: slow,
        }
    }

    /// Fast and slow spans.
    pub fn periods(&self) -> (usize, usize) {
        (self.fast_period, self.slow_period)
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for Macd {
    fn calculate(&self, data: &[f64]) -> Column {
        let fast = self.fast.calculate(data);
        let slow = self.slow.calculate(data);

        fast.iter()
            .zip(slow.iter())
            .map(|(f, s)| Some((*f)? - (*s)?))
            .collect()
    }

    fn period(&self) -> usize {
        self.slow_period
    }

    fn warmup(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars_from(pairs: &[(f64, f64)]) -> Vec<Bar> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, &(open, close))| {
                Bar::new(i as i64, open, open.max(close) + 1.0, open.min(close) - 1.0, close, 1000.0)
            })
            .collect()
    }

    fn oscillating_bars(len: usize) -> Vec<Bar> {
        let pairs: Vec<(f64, f64)> = (0..len)
            .map(|i| {
                let open = 100.0 + (i as f64 * 0.3).sin() * 5.0;
                (open, open * (1.0 + (i as f64 * 0.9).sin() / 100.0))
            })
            .collect();
        bars_from(&pairs)
    }

    #[test]
    fn test_rsi_basic() {
        let rsi = Rsi::new(14);
        let result = rsi.calculate_bars(&oscillating_bars(60));

        assert_eq!(result.len(), 60);
        assert!(result[..13].iter().all(Option::is_none));

        // All RSI values should be between 0 and 100
        for value in result[13..].iter() {
            let value = value.expect("oscillating series has gains and losses");
            assert!((0.0..=100.0).contains(&value));
        }
    }

    #[test]
    fn test_rsi_intermediate_signs() {
        let columns = Rsi::new(3).calculate_columns(&oscillating_bars(30));

        for gain in columns.day_gain.iter().flatten() {
            assert!(*gain >= 0.0);
        }
        for loss in columns.day_loss.iter().flatten() {
            assert!(*loss <= 0.0);
        }
        for loss in columns.avg_loss.iter().flatten() {
            assert!(*loss <= 0.0);
        }
    }

    #[test]
    fn test_rsi_matches_conventional_formula() {
        // Two up days of +2%, one down day of -1%: avg gain 4/3, avg loss -1/3
        let bars = bars_from(&[(100.0, 102.0), (100.0, 102.0), (100.0, 99.0)]);
        let rsi = Rsi::new(3).calculate_bars(&bars);

        let rs = (4.0 / 3.0) / (1.0 / 3.0);
        let conventional = 100.0 - 100.0 / (1.0 + rs);
        assert!((rsi[2].unwrap() - conventional).abs() < 1e-9);
        assert!((rsi[2].unwrap() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_all_gains() {
        let bars = bars_from(&[(100.0, 101.0); 6]);
        let result = Rsi::new(5).calculate_bars(&bars);

        // No losses in the window pins RSI at 100
        assert_eq!(result[4], Some(100.0));
        assert_eq!(result[5], Some(100.0));
    }

    #[test]
    fn test_rsi_all_losses() {
        let bars = bars_from(&[(100.0, 99.0); 6]);
        let result = Rsi::new(5).calculate_bars(&bars);

        assert!(result[5].unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_flat_window_undefined() {
        let bars = bars_from(&[(100.0, 100.0); 20]);
        let result = Rsi::new(14).calculate_bars(&bars);

        assert!(result.iter().all(Option::is_none));
    }

    fn mixed_then(tail: (f64, f64)) -> Vec<Bar> {
        let mut pairs: Vec<(f64, f64)> = (0..14)
            .map(|i| match i % 3 {
                0 => (100.0, 102.7),
                1 => (100.0, 98.9),
                _ => (100.0, 100.3),
            })
            .collect();
        pairs.extend([tail; 14]);
        bars_from(&pairs)
    }

    #[test]
    fn test_rsi_flat_after_moves_is_undefined() {
        let columns = Rsi::new(14).calculate_columns(&mixed_then((100.0, 100.0)));

        assert_eq!(columns.avg_gain[27], Some(0.0));
        assert_eq!(columns.avg_loss[27], Some(0.0));
        assert!(columns.rsi[27].is_none());
        for value in columns.rsi.iter().flatten() {
            assert!((0.0..=100.0).contains(value));
        }
    }

    #[test]
    fn test_rsi_gains_after_moves_is_exactly_100() {
        let columns = Rsi::new(14).calculate_columns(&mixed_then((100.0, 101.0)));

        assert_eq!(columns.avg_loss[27], Some(0.0));
        assert_eq!(columns.rsi[27], Some(100.0));
        for loss in columns.avg_loss.iter().flatten() {
            assert!(*loss <= 0.0);
        }
    }

    #[test]
    fn test_rsi_zero_open_poisons_window() {
        let mut pairs = vec![(100.0, 101.0), (100.0, 99.0)];
        pairs.push((0.0, 1.0));
        pairs.extend([(100.0, 101.0), (100.0, 99.0), (100.0, 101.0)]);
        let result = Rsi::new(2).calculate_bars(&bars_from(&pairs));

        assert!(result[1].is_some());
        assert!(result[2].is_none());
        assert!(result[3].is_none());
        assert!(result[4].is_some());
    }

    #[test]
    fn test_stoch_rsi_bounds() {
        let rsi = Rsi::new(14).calculate_bars(&oscillating_bars(120));
        let stoch = StochRsi::new(14).calculate_column(&rsi);

        assert!(stoch[..26].iter().all(Option::is_none));
        assert!(stoch[26].is_some());
        for value in stoch.iter().flatten() {
            assert!((0.0..=1.0).contains(value));
        }
    }

    #[test]
    fn test_stoch_rsi_flat_window_undefined() {
        let rsi = vec![Some(50.0); 5];
        let stoch = StochRsi::new(3).calculate_column(&rsi);

        assert!(stoch.iter().all(Option::is_none));
    }

    #[test]
    fn test_stoch_rsi_extremes() {
        let rsi = vec![Some(10.0), Some(20.0), Some(30.0), Some(5.0)];
        let stoch = StochRsi::new(3).calculate_column(&rsi);

        assert_eq!(stoch[2], Some(1.0));
        assert_eq!(stoch[3], Some(0.0));
    }

    #[test]
    fn test_macd_basic() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let result = macd.calculate(&data);

        assert_eq!(result.len(), 50);
        assert_eq!(result[0], Some(0.0));
        // In an uptrend, MACD should be positive
        assert!(result.last().unwrap().unwrap() > 0.0);
    }

    #[test]
    fn test_macd_constant_is_zero() {
        let result = Macd::new().calculate(&[75.0; 40]);

        for value in result {
            assert!(value.unwrap().abs() < 1e-9);
        }
    }

    #[test]
    fn test_macd_custom_periods() {
        let macd = Macd::with_periods(5, 10);
        assert_eq!(macd.periods(), (5, 10));

        let data: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        let result = macd.calculate(&data);
        assert!(result.last().unwrap().unwrap() < 0.0);
    }
}
