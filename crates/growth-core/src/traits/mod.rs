//! Core traits for the growth feature pipeline.

mod data_source;
mod indicator;

pub use data_source::DataSource;
pub use indicator::{BarIndicator, Column, Indicator};
