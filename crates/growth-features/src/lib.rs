//! Indicator feature pipeline and forward growth labels.
//!
//! Turns a daily price series into a table of six technical indicators plus
//! a binary label that says whether the adjusted close reached a target
//! growth within the following trading days:
//!
//! ```text
//! series -> RSI -> stochastic RSI -> MACD -> Aroon -> Williams %R -> bull power
//!        -> forward label -> projection -> drop incomplete rows
//! ```
//!
//! The indicator stage ([`IndicatorFrame`]) does not depend on the target,
//! so one frame can be labeled against any number of targets.

pub mod frame;
pub mod label;
pub mod params;
pub mod pipeline;
pub mod report;
pub mod table;

pub use frame::IndicatorFrame;
pub use label::{forward_max, growth_labels, LabelColumns};
pub use params::{GrowthTarget, IndicatorWindows, PipelineParams};
pub use pipeline::FeaturePipeline;
pub use report::{DegenerateWindow, PipelineReport};
pub use table::{FeatureRow, FeatureTable, FEATURE_COLUMNS, LABEL_COLUMN};
