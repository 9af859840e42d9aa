//! Core types and traits for the growth feature pipeline.
//!
//! This crate provides the foundational building blocks including:
//! - Daily price data types (Bar, PriceSeries)
//! - Error types shared by data sources and the feature pipeline
//! - Core traits for indicators and data sources

pub mod types;
pub mod traits;
pub mod error;

pub use error::{DataError, FeatureError, GrowthError, GrowthResult};
pub use types::*;
pub use traits::*;
