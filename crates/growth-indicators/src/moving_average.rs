//! Moving average indicators.

use growth_core::traits::{Column, Indicator};

use crate::{defined, lift};

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values. A window containing
/// an undefined value yields an undefined mean.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Rolling mean over a column that may contain undefined values.
    ///
    /// Each window is summed on its own, so a window of zeros averages to
    /// exactly zero and a window of non-positive values never turns positive.
    pub fn calculate_column(&self, data: &[Option<f64>]) -> Column {
        let mut result = vec![None; data.len()];
        if data.len() < self.period {
            return result;
        }

        let period_f64 = self.period as f64;
        for (i, window) in data.windows(self.period).enumerate() {
            let sum = window.iter().try_fold(0.0, |acc, value| value.map(|v| acc + v));
            result[i + self.period - 1] = sum.and_then(|sum| defined(sum / period_f64));
        }

        result
    }
}

impl Indicator for Sma {
    fn calculate(&self, data: &[f64]) -> Column {
        self.calculate_column(&lift(data))
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Seeded with the first value and updated with
/// `ema = price * alpha + prev * (1 - alpha)`, `alpha = 2 / (span + 1)`,
/// without bias adjustment. Defined from the first row.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Span must be greater than 0");
        let multiplier = 2.0 / (span as f64 + 1.0);
        Self { span, multiplier }
    }

    /// Smoothing factor applied to the newest value.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Indicator for Ema {
    /// Rows with a non-finite input are undefined and leave the running average untouched.
    fn calculate(&self, data: &[f64]) -> Column {
        let one_minus_mult = 1.0 - self.multiplier;
        let mut ema: Option<f64> = None;

        data.iter()
            .map(|&price| {
                if !price.is_finite() {
                    return None;
                }
                let next = match ema {
                    Some(prev) => price * self.multiplier + prev * one_minus_mult,
                    None => price,
                };
                ema = Some(next);
                ema
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.span
    }

    fn warmup(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "EMA"
    }
}
