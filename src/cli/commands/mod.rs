//! CLI command implementations.

pub mod features;
pub mod sweep;
pub mod validate;

use std::path::Path;
use std::time::Duration;

use growth_config::{DataProvider, DataSettings};
use growth_core::error::{GrowthError, GrowthResult};
use growth_core::traits::DataSource;
use growth_core::types::PriceSeries;
use growth_data::{CsvDataSource, YahooDataSource};
use growth_features::PipelineParams;
use tracing::info;

/// Pick the data source: an explicit `--data` path, else the configured provider.
pub fn data_source(settings: &DataSettings, data: Option<&Path>) -> GrowthResult<Box<dyn DataSource>> {
    if let Some(path) = data {
        return Ok(Box::new(CsvDataSource::new(path)?));
    }

    match settings.provider {
        DataProvider::Csv => {
            let dir = settings.csv_dir.as_deref().ok_or_else(|| {
                GrowthError::Config("data.csv_dir must be set when data.provider = \"csv\"".to_string())
            })?;
            Ok(Box::new(CsvDataSource::new(dir)?))
        }
        DataProvider::Yahoo => Ok(Box::new(YahooDataSource::new(
            &settings.yahoo_base_url,
            &settings.user_agent,
            Duration::from_secs(settings.timeout_secs),
        )?)),
    }
}

/// Fetch the daily history of `symbol`.
pub async fn load_series(source: &dyn DataSource, symbol: &str) -> GrowthResult<PriceSeries> {
    info!("Loading {} from {}", symbol, source.name());
    let series = source.daily_history(symbol).await?;
    Ok(series)
}

/// Configured pipeline parameters with command-line overrides applied.
pub fn pipeline_params(
    base: PipelineParams,
    target: Option<i32>,
    lookahead: Option<usize>,
) -> PipelineParams {
    PipelineParams {
        target_percent: target.unwrap_or(base.target_percent),
        lookahead_days: lookahead.unwrap_or(base.lookahead_days),
        ..base
    }
}
