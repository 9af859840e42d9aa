//! CSV data source.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use growth_core::error::DataError;
use growth_core::traits::DataSource;
use growth_core::types::{Bar, PriceSeries};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::normalize_bars;

/// CSV record format, matching the usual daily history export.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close")]
    close: f64,
    #[serde(rename = "Adj Close", alias = "adj_close", alias = "adjclose", default)]
    adj_close: Option<f64>,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// CSV data source for daily history.
///
/// Points either at a single file, used for whatever symbol is requested,
/// or at a directory holding `{symbol}.csv` / `{symbol}_daily.csv` files.
pub struct CsvDataSource {
    path: PathBuf,
}

impl CsvDataSource {
    /// Create a new CSV data source.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::NoDataAvailable(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Resolve the file holding `symbol`.
    fn file_for(&self, symbol: &str) -> Result<PathBuf, DataError> {
        if self.path.is_file() {
            return Ok(self.path.clone());
        }

        let lower = symbol.to_lowercase();
        let candidates = [
            self.path.join(format!("{}.csv", symbol)),
            self.path.join(format!("{}.csv", lower)),
            self.path.join(format!("{}_daily.csv", symbol)),
            self.path.join(format!("{}_daily.csv", lower)),
        ];
        candidates
            .into_iter()
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| DataError::SymbolNotFound(symbol.to_string()))
    }

    /// Load bars from a specific path.
    fn load_from_path(&self, path: &Path) -> Result<Vec<Bar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;

            let timestamp = parse_timestamp(&record.date)?;

            let bar = Bar::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            );
            bars.push(match record.adj_close {
                Some(adj_close) => bar.with_adj_close(adj_close),
                None => bar,
            });
        }

        Ok(bars)
    }
}

#[async_trait]
impl DataSource for CsvDataSource {
    async fn daily_history(&self, symbol: &str) -> Result<PriceSeries, DataError> {
        let path = self.file_for(symbol)?;
        let mut bars = self.load_from_path(&path)?;
        if bars.is_empty() {
            return Err(DataError::NoDataAvailable(path.display().to_string()));
        }

        normalize_bars(symbol, &mut bars);
        info!("Loaded {} daily bars for {} from {}", bars.len(), symbol, path.display());
        PriceSeries::from_bars(symbol, bars)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Parse various timestamp formats into Unix milliseconds.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%m-%Y",
    ];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d.and_time(Default::default()).and_utc().timestamp_millis());
        }
    }

    // Try parsing as Unix timestamp
    if let Ok(ts) = date_str.parse::<i64>() {
        // Assume milliseconds if > 10 digits
        if ts > 10_000_000_000 {
            return Ok(ts);
        } else {
            return Ok(ts * 1000);
        }
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}
