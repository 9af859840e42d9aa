//! SIMD-optimized column kernels.
//!
//! These implementations use the `wide` crate for portable SIMD operations,
//! providing significant performance improvements over long price histories.

use wide::f64x4;

/// Intraday percent change `(close - open) / open * 100` for every row.
///
/// Rows with a zero open produce a non-finite value.
pub fn pct_change_simd(open: &[f64], close: &[f64]) -> Vec<f64> {
    let len = open.len().min(close.len());
    let mut result = Vec::with_capacity(len);

    let chunks = len / 4;
    let hundred = f64x4::splat(100.0);

    for i in 0..chunks {
        let idx = i * 4;
        let o = f64x4::new([open[idx], open[idx + 1], open[idx + 2], open[idx + 3]]);
        let c = f64x4::new([close[idx], close[idx + 1], close[idx + 2], close[idx + 3]]);
        result.extend(((c - o) * hundred / o).to_array());
    }

    // Handle remaining elements
    for i in (chunks * 4)..len {
        result.push(100.0 * (close[i] - open[i]) / open[i]);
    }

    result
}

/// Split a change series into its gain side and loss side.
///
/// Gains keep positive values and zero the rest; losses keep negative
/// values (sign preserved) and zero the rest. Non-finite inputs stay
/// non-finite on both sides.
pub fn split_gains_losses(changes: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut gains = Vec::with_capacity(changes.len());
    let mut losses = Vec::with_capacity(changes.len());

    let chunks = changes.len() / 4;
    let zero = f64x4::splat(0.0);

    for i in 0..chunks {
        let idx = i * 4;
        let lanes = [
            changes[idx],
            changes[idx + 1],
            changes[idx + 2],
            changes[idx + 3],
        ];

        // Lane-wise max/min semantics for NaN are not portable
        if lanes.iter().all(|v| v.is_finite()) {
            let diff = f64x4::new(lanes);
            gains.extend(diff.max(zero).to_array());
            losses.extend(diff.min(zero).to_array());
        } else {
            for value in lanes {
                let (gain, loss) = split_scalar(value);
                gains.push(gain);
                losses.push(loss);
            }
        }
    }

    // Handle remaining elements
    for &value in &changes[chunks * 4..] {
        let (gain, loss) = split_scalar(value);
        gains.push(gain);
        losses.push(loss);
    }

    (gains, losses)
}

#[inline]
fn split_scalar(value: f64) -> (f64, f64) {
    if !value.is_finite() {
        (value, value)
    } else if value > 0.0 {
        (value, 0.0)
    } else {
        (0.0, value.min(0.0))
    }
}
