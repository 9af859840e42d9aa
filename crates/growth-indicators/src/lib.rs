//! Technical indicators with SIMD optimization.
//!
//! This crate provides the indicators behind the growth feature table:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI on intraday moves, Stochastic RSI, MACD)
//! - Oscillators (Aroon, Williams %R, Bull Power)
//!
//! Every indicator returns a column aligned with its input where `None`
//! marks a row without a defined value. Division by zero never panics; it
//! leaves the affected row undefined.

pub mod momentum;
pub mod moving_average;
pub mod oscillator;
pub mod rolling;
pub mod simd;

pub use momentum::{Macd, Rsi, RsiColumns, StochRsi};
pub use moving_average::{Ema, Sma};
pub use oscillator::{Aroon, AroonColumns, BullPower, WilliamsR};

use growth_core::traits::Column;

/// Keep finite values, map NaN and infinities to `None`.
#[inline]
pub(crate) fn defined(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Lift a raw price column into an aligned column.
pub fn lift(data: &[f64]) -> Column {
    data.iter().map(|&v| defined(v)).collect()
}
