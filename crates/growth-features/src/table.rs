//! Final feature table.

use std::io::Write;

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::report::PipelineReport;

/// Names of the feature columns, in matrix order.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "adj_close",
    "rsi_14",
    "stoch_rsi",
    "macd",
    "aroon",
    "williams_r",
    "bull_power",
];

/// Name of the label column.
pub const LABEL_COLUMN: &str = "label";

/// One complete trading day of features and its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    pub adj_close: f64,
    pub rsi_14: f64,
    pub stoch_rsi: f64,
    pub macd: f64,
    pub aroon: f64,
    pub williams_r: f64,
    pub bull_power: f64,
    /// 1 if the target growth was reached within the lookahead
    pub label: u8,
}

impl FeatureRow {
    /// Feature values in `FEATURE_COLUMNS` order.
    pub fn features(&self) -> [f64; 7] {
        [
            self.adj_close,
            self.rsi_14,
            self.stoch_rsi,
            self.macd,
            self.aroon,
            self.williams_r,
            self.bull_power,
        ]
    }

    /// Calendar date of the row as `YYYY-MM-DD`.
    pub fn date(&self) -> String {
        DateTime::from_timestamp_millis(self.timestamp)
            .unwrap_or_default()
            .format("%Y-%m-%d")
            .to_string()
    }
}

/// CSV layout: the row with its date spelled out.
#[derive(Serialize)]
struct CsvRecord {
    date: String,
    adj_close: f64,
    rsi_14: f64,
    stoch_rsi: f64,
    macd: f64,
    aroon: f64,
    williams_r: f64,
    bull_power: f64,
    label: u8,
}

impl From<&FeatureRow> for CsvRecord {
    fn from(row: &FeatureRow) -> Self {
        Self {
            date: row.date(),
            adj_close: row.adj_close,
            rsi_14: row.rsi_14,
            stoch_rsi: row.stoch_rsi,
            macd: row.macd,
            aroon: row.aroon,
            williams_r: row.williams_r,
            bull_power: row.bull_power,
            label: row.label,
        }
    }
}

/// Labeled feature table in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureTable {
    pub symbol: String,
    pub target_percent: i32,
    pub lookahead_days: usize,
    pub rows: Vec<FeatureRow>,
    pub report: PipelineReport,
}

impl FeatureTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get an iterator over the rows.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureRow> {
        self.rows.iter()
    }

    /// Last `n` rows.
    pub fn tail(&self, n: usize) -> &[FeatureRow] {
        &self.rows[self.rows.len().saturating_sub(n)..]
    }

    /// Number of rows labeled 1.
    pub fn positives(&self) -> usize {
        self.rows.iter().filter(|r| r.label == 1).count()
    }

    /// Share of rows labeled 1, in [0, 1].
    pub fn positive_share(&self) -> f64 {
        if self.rows.is_empty() {
            0.0
        } else {
            self.positives() as f64 / self.rows.len() as f64
        }
    }

    /// Separate the feature matrix from the label column for a classifier.
    pub fn split_label(&self) -> (Vec<[f64; 7]>, Vec<u8>) {
        self.rows.iter().map(|r| (r.features(), r.label)).unzip()
    }

    /// Write the table as CSV with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            writer.serialize(CsvRecord::from(row))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Render the table as a CSV string.
    pub fn to_csv_string(&self) -> Result<String, csv::Error> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Serialize the table, report included, as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
