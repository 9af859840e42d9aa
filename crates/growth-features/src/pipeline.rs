//! Batch feature pipeline.

use growth_core::error::FeatureError;
use growth_core::types::PriceSeries;
use tracing::{debug, info};

use crate::frame::IndicatorFrame;
use crate::params::PipelineParams;
use crate::table::FeatureTable;

/// Turns a daily price series into a labeled feature table.
///
/// Each call recomputes everything from the series. Callers labeling the
/// same series against several targets should call [`FeaturePipeline::indicators`]
/// once and then [`FeaturePipeline::label`] per target.
#[derive(Debug, Clone)]
pub struct FeaturePipeline {
    params: PipelineParams,
}

impl FeaturePipeline {
    /// Create a pipeline, rejecting unusable parameters up front.
    pub fn new(params: PipelineParams) -> Result<Self, FeatureError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Pipeline parameters.
    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    /// Check the series is long enough to produce at least one complete row.
    pub fn check_history(&self, series: &PriceSeries) -> Result<(), FeatureError> {
        let required = self.params.required_history();
        if series.len() < required {
            return Err(FeatureError::InsufficientHistory {
                required,
                available: series.len(),
            });
        }
        Ok(())
    }

    /// Target-independent stage: every indicator column.
    pub fn indicators(&self, series: &PriceSeries) -> Result<IndicatorFrame, FeatureError> {
        self.check_history(series)?;
        debug!(
            "Computing indicators for {} over {} days",
            series.symbol(),
            series.len()
        );
        IndicatorFrame::compute(series, self.params.windows)
    }

    /// Label stage: label a computed frame against `target_percent` and
    /// assemble the table.
    pub fn label(
        &self,
        frame: &IndicatorFrame,
        target_percent: i32,
    ) -> Result<FeatureTable, FeatureError> {
        let params = PipelineParams {
            target_percent,
            ..self.params
        };
        frame.assemble(params.target()?, params.lookahead_days)
    }

    /// Full run with the configured target.
    pub fn run(&self, series: &PriceSeries) -> Result<FeatureTable, FeatureError> {
        info!(
            "Building features for {} with a {}% target over {} days",
            series.symbol(),
            self.params.target_percent,
            self.params.lookahead_days
        );
        let frame = self.indicators(series)?;
        self.label(&frame, self.params.target_percent)
    }
}
