//! Indicator columns for one price series.
//!
//! The frame holds every target-independent column. Labeling and table
//! assembly run on top of it, so several growth targets can share one
//! indicator pass.

use growth_core::error::FeatureError;
use growth_core::traits::{BarIndicator, Column, Indicator};
use growth_core::types::PriceSeries;
use growth_indicators::{Aroon, AroonColumns, BullPower, Macd, Rsi, RsiColumns, StochRsi, WilliamsR};
use tracing::{debug, info, warn};

use crate::label::{growth_labels, LabelColumns};
use crate::params::{validate_lookahead, GrowthTarget, IndicatorWindows};
use crate::report::{DegenerateWindow, PipelineReport};
use crate::table::{FeatureRow, FeatureTable};

/// Derived indicator columns, aligned with the source series.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    pub symbol: String,
    pub windows: IndicatorWindows,
    pub timestamps: Vec<i64>,
    pub adj_close: Vec<f64>,
    pub rsi: RsiColumns,
    pub stoch_rsi: Column,
    pub macd: Column,
    pub aroon: AroonColumns,
    pub williams_r: Column,
    pub bull_power: Column,
}

impl IndicatorFrame {
    /// Run the indicator stages in order: RSI, stochastic RSI, MACD, Aroon,
    /// Williams %R, bull power.
    ///
    /// Fails with `InvalidParameter` for a zero window or a fast MACD span
    /// not below the slow one.
    pub fn compute(series: &PriceSeries, windows: IndicatorWindows) -> Result<Self, FeatureError> {
        windows.validate()?;
        let bars = series.bars();
        let closes = series.closes();

        let rsi = Rsi::new(windows.rsi).calculate_columns(bars);
        debug!("RSI-{} computed for {} rows", windows.rsi, bars.len());

        let stoch_rsi = StochRsi::new(windows.stoch_rsi).calculate_column(&rsi.rsi);
        debug!("Stochastic RSI-{} computed", windows.stoch_rsi);

        let macd = Macd::with_periods(windows.macd_fast, windows.macd_slow).calculate(&closes);
        debug!("MACD {}/{} computed", windows.macd_fast, windows.macd_slow);

        let aroon = Aroon::new(windows.aroon).calculate_columns(&closes);
        debug!("Aroon-{} computed", windows.aroon);

        let williams_r = WilliamsR::new(windows.williams_r).calculate_bars(bars);
        debug!("Williams %R-{} computed", windows.williams_r);

        let bull_power = BullPower::new(windows.bull_power).calculate_bars(bars);
        debug!("Bull power EMA-{} computed", windows.bull_power);

        Ok(Self {
            symbol: series.symbol().to_string(),
            windows,
            timestamps: series.timestamps(),
            adj_close: series.adj_closes(),
            rsi,
            stoch_rsi,
            macd,
            aroon,
            williams_r,
            bull_power,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// The six feature columns with the first row each can be defined at.
    fn feature_columns(&self) -> [(&'static str, &Column, usize); 6] {
        let w = &self.windows;
        [
            ("rsi_14", &self.rsi.rsi, w.rsi_warmup()),
            ("stoch_rsi", &self.stoch_rsi, w.stoch_rsi_warmup()),
            ("macd", &self.macd, 0),
            ("aroon", &self.aroon.oscillator, w.aroon - 1),
            ("williams_r", &self.williams_r, w.williams_r - 1),
            ("bull_power", &self.bull_power, 0),
        ]
    }

    /// Indicators with undefined values past their own warm-up.
    pub fn degenerate_windows(&self) -> Vec<DegenerateWindow> {
        self.feature_columns()
            .iter()
            .filter_map(|(name, column, warmup)| {
                let rows = column.iter().skip(*warmup).filter(|v| v.is_none()).count();
                (rows > 0).then(|| DegenerateWindow {
                    indicator: name.to_string(),
                    rows,
                })
            })
            .collect()
    }

    /// Label every row against a growth target.
    pub fn label(&self, target: GrowthTarget, lookahead_days: usize) -> LabelColumns {
        growth_labels(&self.adj_close, target, lookahead_days)
    }

    /// Project the feature columns plus label and keep only complete rows.
    pub fn assemble(
        &self,
        target: GrowthTarget,
        lookahead_days: usize,
    ) -> Result<FeatureTable, FeatureError> {
        validate_lookahead(lookahead_days)?;
        let labels = self.label(target, lookahead_days);
        debug!(
            "Labeled {} of {} rows for a {}% target",
            labels.defined(),
            self.len(),
            target.percent()
        );

        let len = self.len();
        let warmup = self.windows.warmup_rows();
        let mut report = PipelineReport {
            input_rows: len,
            degenerate: self.degenerate_windows(),
            ..PipelineReport::default()
        };

        let mut rows = Vec::with_capacity(len.saturating_sub(warmup + lookahead_days));
        for i in 0..len {
            match self.row(i, &labels) {
                Some(row) => rows.push(row),
                None if i + lookahead_days >= len => report.lookahead_rows += 1,
                None if i < warmup => report.warmup_rows += 1,
                None => report.degenerate_rows += 1,
            }
        }
        report.output_rows = rows.len();

        for window in &report.degenerate {
            warn!(
                "{}: {} rows with a degenerate {} window left undefined",
                self.symbol, window.rows, window.indicator
            );
        }

        if rows.is_empty() {
            return Err(FeatureError::NoCompleteRows { input_rows: len });
        }

        info!(
            "{}: {} complete rows from {} days ({} dropped)",
            self.symbol,
            report.output_rows,
            report.input_rows,
            report.dropped()
        );

        Ok(FeatureTable {
            symbol: self.symbol.clone(),
            target_percent: target.percent(),
            lookahead_days,
            rows,
            report,
        })
    }

    /// Row `i` if every projected column holds a value.
    fn row(&self, i: usize, labels: &LabelColumns) -> Option<FeatureRow> {
        Some(FeatureRow {
            timestamp: self.timestamps[i],
            adj_close: Some(self.adj_close[i]).filter(|v| v.is_finite())?,
            rsi_14: self.rsi.rsi[i]?,
            stoch_rsi: self.stoch_rsi[i]?,
            macd: self.macd[i]?,
            aroon: self.aroon.oscillator[i]?,
            williams_r: self.williams_r[i]?,
            bull_power: self.bull_power[i]?,
            label: labels.label[i]?,
        })
    }
}
