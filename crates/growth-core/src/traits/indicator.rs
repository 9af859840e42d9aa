//! Indicator trait definitions.

use crate::types::Bar;

/// A derived column aligned with its input: one entry per trading day,
/// `None` where the value is undefined (warm-up or a degenerate window).
pub type Column = Vec<Option<f64>>;

/// Trait for technical indicators computed from a single price column.
///
/// Output is always aligned with the input, so `calculate(data).len() == data.len()`.
pub trait Indicator: Send + Sync {
    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically closes)
    ///
    /// # Returns
    /// One value per input row, `None` before warm-up
    fn calculate(&self, data: &[f64]) -> Column;

    /// Get the window length of the indicator.
    fn period(&self) -> usize;

    /// Index of the first row that can hold a value.
    fn warmup(&self) -> usize {
        self.period().saturating_sub(1)
    }

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

/// Indicator that needs more of the bar than one price column
/// (e.g. high/low/close or open/close).
pub trait BarIndicator: Send + Sync {
    /// Calculate indicator values from daily bars.
    fn calculate_bars(&self, bars: &[Bar]) -> Column;

    /// Get the window length of the indicator.
    fn period(&self) -> usize;

    /// Index of the first row that can hold a value.
    fn warmup(&self) -> usize {
        self.period().saturating_sub(1)
    }

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}
