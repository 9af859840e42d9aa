//! Row accounting for a pipeline run.

use serde::{Deserialize, Serialize};

/// Rolling windows of one indicator that produced no value after warm-up,
/// e.g. a flat RSI window under the stochastic RSI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegenerateWindow {
    pub indicator: String,
    pub rows: usize,
}

/// Where the input rows went.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineReport {
    pub input_rows: usize,
    pub output_rows: usize,
    /// Leading rows dropped while indicators warm up
    pub warmup_rows: usize,
    /// Trailing rows dropped for lacking a full future window
    pub lookahead_rows: usize,
    /// Remaining rows dropped because some indicator was undefined
    pub degenerate_rows: usize,
    pub degenerate: Vec<DegenerateWindow>,
}

impl PipelineReport {
    /// Total rows removed from the input.
    pub fn dropped(&self) -> usize {
        self.warmup_rows + self.lookahead_rows + self.degenerate_rows
    }
}
