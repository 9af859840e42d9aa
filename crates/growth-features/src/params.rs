//! Pipeline parameters.

use growth_core::error::FeatureError;
use serde::{Deserialize, Serialize};

/// Window lengths of the six indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorWindows {
    pub rsi: usize,
    pub stoch_rsi: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub aroon: usize,
    pub williams_r: usize,
    pub bull_power: usize,
}

impl Default for IndicatorWindows {
    fn default() -> Self {
        Self {
            rsi: 14,
            stoch_rsi: 14,
            macd_fast: 12,
            macd_slow: 24,
            aroon: 25,
            williams_r: 14,
            bull_power: 14,
        }
    }
}

impl IndicatorWindows {
    /// Check every window is usable.
    pub fn validate(&self) -> Result<(), FeatureError> {
        let named = [
            ("rsi", self.rsi),
            ("stoch_rsi", self.stoch_rsi),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("aroon", self.aroon),
            ("williams_r", self.williams_r),
            ("bull_power", self.bull_power),
        ];
        if let Some((name, _)) = named.iter().find(|(_, window)| *window == 0) {
            return Err(FeatureError::InvalidParameter(format!(
                "window '{}' must be greater than 0",
                name
            )));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(FeatureError::InvalidParameter(format!(
                "macd_fast ({}) must be less than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        Ok(())
    }

    /// First row of the RSI column that can be defined.
    pub fn rsi_warmup(&self) -> usize {
        self.rsi - 1
    }

    /// First row of the stochastic RSI column that can be defined.
    pub fn stoch_rsi_warmup(&self) -> usize {
        self.rsi_warmup() + self.stoch_rsi - 1
    }

    /// Number of leading rows where at least one indicator is still warming up.
    pub fn warmup_rows(&self) -> usize {
        self.stoch_rsi_warmup()
            .max(self.aroon - 1)
            .max(self.williams_r - 1)
    }
}

/// Growth threshold for the label, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthTarget {
    percent: i32,
}

impl GrowthTarget {
    /// Create a target; the price must not be required to fall to zero or below.
    pub fn new(percent: i32) -> Result<Self, FeatureError> {
        if percent <= -100 {
            return Err(FeatureError::InvalidParameter(format!(
                "target percent {} would require a non-positive price",
                percent
            )));
        }
        Ok(Self { percent })
    }

    /// Target in percent.
    pub fn percent(&self) -> i32 {
        self.percent
    }

    /// `1 + percent / 100`, e.g. 8% becomes 1.08.
    pub fn multiplier(&self) -> f64 {
        1.0 + self.percent as f64 / 100.0
    }
}

/// Everything one pipeline invocation needs besides the price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineParams {
    /// Required growth within the lookahead, in percent
    pub target_percent: i32,
    /// Trading days after each row searched for the target
    pub lookahead_days: usize,
    pub windows: IndicatorWindows,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            target_percent: 3,
            lookahead_days: 30,
            windows: IndicatorWindows::default(),
        }
    }
}

impl PipelineParams {
    /// Parameters with the default windows and lookahead.
    pub fn with_target(target_percent: i32) -> Self {
        Self {
            target_percent,
            ..Self::default()
        }
    }

    /// Validate windows, lookahead and target.
    pub fn validate(&self) -> Result<(), FeatureError> {
        self.windows.validate()?;
        validate_lookahead(self.lookahead_days)?;
        self.target()?;
        Ok(())
    }

    /// The growth target.
    pub fn target(&self) -> Result<GrowthTarget, FeatureError> {
        GrowthTarget::new(self.target_percent)
    }

    /// Shortest series that can yield at least one complete row.
    pub fn required_history(&self) -> usize {
        self.windows.warmup_rows() + self.lookahead_days + 1
    }
}

pub(crate) fn validate_lookahead(lookahead_days: usize) -> Result<(), FeatureError> {
    if lookahead_days == 0 {
        return Err(FeatureError::InvalidParameter(
            "lookahead_days must be greater than 0".to_string(),
        ));
    }
    Ok(())
}
