//! Error types for the growth feature pipeline.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data acquisition failed: {0}")]
    DataAcquisition(#[from] DataError),

    #[error("Feature pipeline error: {0}")]
    Feature(#[from] FeatureError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Data source errors.
///
/// Every failure to obtain a usable price series surfaces as one of these;
/// a source never hands back an empty series in place of an error.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for {0}")]
    NoDataAvailable(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Bars out of order at index {index}: timestamp {timestamp} does not follow {previous}")]
    Unordered {
        index: usize,
        previous: i64,
        timestamp: i64,
    },
}

/// Feature pipeline errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FeatureError {
    #[error("Insufficient history: need {required} days, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    #[error("No complete rows: all {input_rows} rows had an undefined feature or label")]
    NoCompleteRows { input_rows: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pipeline operations.
pub type GrowthResult<T> = Result<T, GrowthError>;
