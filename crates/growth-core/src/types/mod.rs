//! Core data types for the growth feature pipeline.

mod ohlcv;

pub use ohlcv::{Bar, PriceSeries};
