//! Range and trend-pressure oscillators.

use growth_core::traits::{BarIndicator, Column, Indicator};
use growth_core::types::Bar;
use serde::{Deserialize, Serialize};

use crate::moving_average::Ema;
use crate::rolling::{days_since_extremes, rolling_max, rolling_min};
use crate::{defined, lift};

/// Aroon up/down pair and their difference, aligned with the input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AroonColumns {
    pub up: Column,
    pub down: Column,
    pub oscillator: Column,
}

/// Aroon oscillator.
///
/// Within each trailing window of `period` closes, counts the days since the
/// most recent maximum and minimum (0 = the newest day):
/// `up = 100 * (period - days_since_max) / period`, likewise `down`, and the
/// oscillator is `up - down`.
#[derive(Debug, Clone)]
pub struct Aroon {
    period: usize,
}

impl Aroon {
    /// Create a new Aroon oscillator.
    ///
    /// Common period is 25.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Calculate up, down and oscillator columns.
    pub fn calculate_columns(&self, data: &[f64]) -> AroonColumns {
        let len = data.len();
        let mut columns = AroonColumns {
            up: vec![None; len],
            down: vec![None; len],
            oscillator: vec![None; len],
        };
        if len < self.period {
            return columns;
        }

        let period_f64 = self.period as f64;
        for (i, window) in data.windows(self.period).enumerate() {
            if !window.iter().all(|v| v.is_finite()) {
                continue;
            }
            let (since_max, since_min) = days_since_extremes(window);
            let up = 100.0 * (period_f64 - since_max as f64) / period_f64;
            let down = 100.0 * (period_f64 - since_min as f64) / period_f64;

            let row = i + self.period - 1;
            columns.up[row] = Some(up);
            columns.down[row] = Some(down);
            columns.oscillator[row] = Some(up - down);
        }

        columns
    }
}

impl Default for Aroon {
    fn default() -> Self {
        Self::new(25)
    }
}

impl Indicator for Aroon {
    fn calculate(&self, data: &[f64]) -> Column {
        self.calculate_columns(data).oscillator
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Aroon"
    }
}

/// Williams %R.
///
/// `(highest_high - close) / (highest_high - lowest_low) * -100` over the
/// trailing period; bounded to [-100, 0] for well-formed bars. Undefined
/// when the window has no range.
#[derive(Debug, Clone)]
pub struct WilliamsR {
    period: usize,
}

impl WilliamsR {
    /// Create a new Williams %R.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Calculate from OHLC columns.
    pub fn calculate_ohlc(&self, high: &[f64], low: &[f64], close: &[f64]) -> Column {
        let len = high.len().min(low.len()).min(close.len());
        let highest = rolling_max(&lift(&high[..len]), self.period);
        let lowest = rolling_min(&lift(&low[..len]), self.period);

        (0..len)
            .map(|i| {
                let (hh, ll) = (highest[i]?, lowest[i]?);
                let range = hh - ll;
                if range == 0.0 {
                    return None;
                }
                defined((hh - close[i]) / range * -100.0)
            })
            .collect()
    }
}

impl Default for WilliamsR {
    fn default() -> Self {
        Self::new(14)
    }
}

impl BarIndicator for WilliamsR {
    fn calculate_bars(&self, bars: &[Bar]) -> Column {
        let high: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let low: Vec<f64> = bars.iter().map(|b| b.low).collect();
        let close: Vec<f64> = bars.iter().map(|b| b.close).collect();
        self.calculate_ohlc(&high, &low, &close)
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "Williams %R"
    }
}

/// Bull power: the day's high minus an EMA of the close.
#[derive(Debug, Clone)]
pub struct BullPower {
    ema: Ema,
    span: usize,
}

impl BullPower {
    /// Create a new bull power indicator over an EMA of `span`.
    pub fn new(span: usize) -> Self {
        Self {
            ema: Ema::new(span),
            span,
        }
    }

    /// Calculate from high and close columns.
    pub fn calculate_hc(&self, high: &[f64], close: &[f64]) -> Column {
        let ema = self.ema.calculate(close);
        high.iter()
            .zip(ema.iter())
            .map(|(&h, e)| defined(h - (*e)?))
            .collect()
    }
}

impl Default for BullPower {
    fn default() -> Self {
        Self::new(14)
    }
}

impl BarIndicator for BullPower {
    fn calculate_bars(&self, bars: &[Bar]) -> Column {
        let high: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let close: Vec<f64> = bars.iter().map(|b| b.close).collect();
        self.calculate_hc(&high, &close)
    }

    fn period(&self) -> usize {
        self.span
    }

    fn warmup(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "Bull Power"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aroon_rising_series() {
        let data: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let columns = Aroon::new(25).calculate_columns(&data);

        assert!(columns.oscillator[..24].iter().all(Option::is_none));
        for i in 24..40 {
            // The newest close is always the maximum, the oldest the minimum
            assert_eq!(columns.up[i], Some(100.0));
            assert_eq!(columns.down[i], Some(4.0));
            assert_eq!(columns.oscillator[i], Some(96.0));
        }
    }

    #[test]
    fn test_aroon_falling_series() {
        let data: Vec<f64> = (0..30).map(|i| 100.0 - i as f64).collect();
        let result = Aroon::new(25).calculate(&data);

        assert_eq!(result[29], Some(-96.0));
    }

    #[test]
    fn test_aroon_tie_uses_latest_extreme() {
        // Max 9.0 at offsets 3 and 1, min 1.0 at offset 4
        let data = vec![1.0, 9.0, 5.0, 9.0, 5.0];
        let columns = Aroon::new(5).calculate_columns(&data);

        assert_eq!(columns.up[4], Some(80.0));
        assert_eq!(columns.down[4], Some(20.0));
        assert_eq!(columns.oscillator[4], Some(60.0));
    }

    #[test]
    fn test_williams_r_bounds() {
        let high: Vec<f64> = (0..30).map(|i| 105.0 + (i as f64 * 0.7).sin() * 3.0).collect();
        let low: Vec<f64> = high.iter().map(|h| h - 6.0).collect();
        let close: Vec<f64> = high.iter().map(|h| h - 2.5).collect();

        let result = WilliamsR::new(14).calculate_ohlc(&high, &low, &close);
        assert!(result[..13].iter().all(Option::is_none));
        for value in result[13..].iter() {
            let value = value.unwrap();
            assert!((-100.0..=0.0).contains(&value));
        }
    }

    #[test]
    fn test_williams_r_close_at_extremes() {
        let high = vec![10.0, 12.0, 11.0];
        let low = vec![8.0, 9.0, 7.0];

        let at_high = WilliamsR::new(3).calculate_ohlc(&high, &low, &[9.0, 10.0, 12.0]);
        let at_low = WilliamsR::new(3).calculate_ohlc(&high, &low, &[9.0, 10.0, 7.0]);

        assert_eq!(at_high[2], Some(-0.0));
        assert_eq!(at_low[2], Some(-100.0));
    }

    #[test]
    fn test_williams_r_flat_window_undefined() {
        let flat = vec![50.0; 5];
        let result = WilliamsR::new(3).calculate_ohlc(&flat, &flat, &flat);

        assert!(result.iter().all(Option::is_none));
    }

    #[test]
    fn test_bull_power_constant_close() {
        let bars: Vec<Bar> = (0..20)
            .map(|i| Bar::new(i, 50.0, 52.0, 49.0, 50.0, 100.0))
            .collect();
        let result = BullPower::new(14).calculate_bars(&bars);

        assert_eq!(result.len(), 20);
        for value in result {
            assert!((value.unwrap() - 2.0).abs() < 1e-9);
        }
    }
}
