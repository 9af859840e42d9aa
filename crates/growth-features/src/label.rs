//! Forward-looking growth label.

use growth_core::traits::Column;

use crate::params::GrowthTarget;

/// Label stage output, aligned with the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelColumns {
    /// Highest adjusted close over the days strictly after each row
    pub shifted_max: Column,
    /// 1 when the row's target was reached inside the lookahead, else 0
    pub label: Vec<Option<u8>>,
}

impl LabelColumns {
    /// Number of rows carrying a label.
    pub fn defined(&self) -> usize {
        self.label.iter().flatten().count()
    }
}

/// Maximum of `values[t+1..=t+lookahead]` for every row `t`.
///
/// Rows whose future window runs past the end of the data are `None`
/// rather than a maximum over a shorter window.
pub fn forward_max(values: &[f64], lookahead: usize) -> Column {
    let mut result = vec![None; values.len()];
    if lookahead == 0 || values.len() <= lookahead {
        return result;
    }

    for (t, window) in values[1..].windows(lookahead).enumerate() {
        result[t] = window.iter().try_fold(f64::NEG_INFINITY, |acc, &v| {
            v.is_finite().then(|| acc.max(v))
        });
    }

    result
}

/// Label each row 1 if `adj_close * multiplier <= forward max`, else 0.
pub fn growth_labels(adj_close: &[f64], target: GrowthTarget, lookahead: usize) -> LabelColumns {
    let multiplier = target.multiplier();
    let shifted_max = forward_max(adj_close, lookahead);

    let label = adj_close
        .iter()
        .zip(shifted_max.iter())
        .map(|(&price, future)| {
            let future = (*future)?;
            if !price.is_finite() {
                return None;
            }
            Some(u8::from(price * multiplier <= future))
        })
        .collect();

    LabelColumns { shifted_max, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_max_excludes_current_day() {
        let values = vec![10.0, 3.0, 5.0, 4.0, 1.0];
        let result = forward_max(&values, 2);

        assert_eq!(result, vec![Some(5.0), Some(5.0), Some(4.0), None, None]);
    }

    #[test]
    fn test_forward_max_short_series() {
        assert!(forward_max(&[1.0, 2.0], 2).iter().all(Option::is_none));
    }

    #[test]
    fn test_label_reached_on_last_lookahead_day() {
        let target = GrowthTarget::new(3).unwrap();
        let mut prices = vec![100.0; 40];
        // Day 31 (index 30) is the last day inside row 0's window
        prices[30] = 100.0 * target.multiplier();

        let labels = growth_labels(&prices, target, 30);

        assert_eq!(labels.label[0], Some(1));
        // Every labeled row (0..=9) has index 30 inside its window
        assert!(labels.label[..10].iter().all(|l| *l == Some(1)));
    }

    #[test]
    fn test_label_never_reached() {
        let target = GrowthTarget::new(3).unwrap();
        let prices: Vec<f64> = (0..40).map(|i| 100.0 + i as f64 * 0.05).collect();

        let labels = growth_labels(&prices, target, 30);

        assert_eq!(labels.label[0], Some(0));
    }

    #[test]
    fn test_label_just_outside_window() {
        let target = GrowthTarget::new(3).unwrap();
        let mut prices = vec![100.0; 40];
        prices[31] = 200.0;

        let labels = growth_labels(&prices, target, 30);

        assert_eq!(labels.label[0], Some(0));
        assert_eq!(labels.label[1], Some(1));
    }

    #[test]
    fn test_label_tail_is_undefined() {
        let target = GrowthTarget::new(3).unwrap();
        let prices = vec![100.0; 40];

        let labels = growth_labels(&prices, target, 30);

        assert_eq!(labels.defined(), 10);
        assert!(labels.label[10..].iter().all(Option::is_none));
        assert!(labels.shifted_max[10..].iter().all(Option::is_none));
    }
}
