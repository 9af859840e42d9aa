//! Yahoo Finance chart API source.
//!
//! Fetches the full daily history (`range=max`) including the adjusted
//! close series.

use std::time::Duration;

use async_trait::async_trait;
use growth_core::error::DataError;
use growth_core::traits::DataSource;
use growth_core::types::{Bar, PriceSeries};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::normalize_bars;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteData>,
    #[serde(default)]
    adjclose: Vec<AdjCloseData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjCloseData {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

/// Yahoo Finance daily history client.
pub struct YahooDataSource {
    base_url: String,
    client: Client,
}

impl YahooDataSource {
    /// Create a client against `base_url`.
    pub fn new(base_url: &str, user_agent: &str, timeout: Duration) -> Result<Self, DataError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol)
    }
}

#[async_trait]
impl DataSource for YahooDataSource {
    async fn daily_history(&self, symbol: &str) -> Result<PriceSeries, DataError> {
        let url = self.chart_url(symbol);
        debug!("Fetching daily history from {}", url);

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("interval", "1d"),
                ("range", "max"),
                ("includeAdjustedClose", "true"),
            ])
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::SymbolNotFound(symbol.to_string()));
        }

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(DataError::ApiError(format!("{}: {}", status, text)));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;
        let series = parse_chart(symbol, &body)?;

        info!("Fetched {} daily bars for {}", series.len(), symbol);
        Ok(series)
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

fn at(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

/// Turn a chart API response body into a price series.
///
/// Days with any missing OHLC value are skipped; a missing adjusted close
/// falls back to the close.
fn parse_chart(symbol: &str, body: &str) -> Result<PriceSeries, DataError> {
    let response: ChartResponse =
        serde_json::from_str(body).map_err(|e| DataError::ParseError(e.to_string()))?;

    if let Some(error) = response.chart.error {
        return Err(if error.code.eq_ignore_ascii_case("Not Found") {
            DataError::SymbolNotFound(symbol.to_string())
        } else {
            DataError::ApiError(format!("{} - {}", error.code, error.description))
        });
    }

    let data = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| DataError::NoDataAvailable(symbol.to_string()))?;

    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| DataError::ParseError("No quote data".to_string()))?;
    let adjclose = data
        .indicators
        .adjclose
        .into_iter()
        .next()
        .map(|a| a.adjclose)
        .unwrap_or_default();

    let mut bars = Vec::with_capacity(data.timestamp.len());
    for (i, &ts) in data.timestamp.iter().enumerate() {
        let fields = (
            at(&quote.open, i),
            at(&quote.high, i),
            at(&quote.low, i),
            at(&quote.close, i),
        );
        if let (Some(open), Some(high), Some(low), Some(close)) = fields {
            let volume = at(&quote.volume, i).unwrap_or(0.0);
            let adj_close = at(&adjclose, i).unwrap_or(close);
            bars.push(Bar::new(ts * 1000, open, high, low, close, volume).with_adj_close(adj_close));
        }
    }

    if bars.is_empty() {
        return Err(DataError::NoDataAvailable(symbol.to_string()));
    }

    normalize_bars(symbol, &mut bars);
    PriceSeries::from_bars(symbol, bars)
}
