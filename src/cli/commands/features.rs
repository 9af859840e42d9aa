//! Features command implementation.

use anyhow::{Context, Result};
use growth_config::AppConfig;
use growth_core::error::{GrowthError, GrowthResult};
use growth_features::{FeaturePipeline, FeatureTable};
use std::fs::File;
use std::path::Path;
use tracing::info;

use super::{data_source, load_series, pipeline_params};
use crate::cli::{FeaturesArgs, OutputFormat};

pub async fn run(args: FeaturesArgs, config: &AppConfig) -> Result<()> {
    let params = pipeline_params(config.pipeline, args.target, args.lookahead);
    let pipeline = FeaturePipeline::new(params).context("Invalid pipeline parameters")?;

    let source = data_source(&config.data, args.data.as_deref())?;
    let series = load_series(source.as_ref(), &args.symbol)
        .await
        .with_context(|| format!("Failed to load daily history for {}", args.symbol))?;

    let table = pipeline
        .run(&series)
        .with_context(|| format!("Failed to build features for {}", args.symbol))?;

    match args.output {
        OutputFormat::Text => println!("{}", summary(&table, args.tail)),
        OutputFormat::Csv => table.write_csv(std::io::stdout().lock())?,
        OutputFormat::Json => println!("{}", table.to_json()?),
    }

    if let Some(save_path) = &args.save {
        save(&table, save_path)
            .with_context(|| format!("Failed to save table to {}", save_path.display()))?;
        info!("Table saved to {:?}", save_path);
    }

    Ok(())
}

/// Write the table to `path`: JSON for a `.json` extension, CSV otherwise.
fn save(table: &FeatureTable, path: &Path) -> GrowthResult<()> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let json = table
            .to_json()
            .map_err(|e| GrowthError::Serialization(e.to_string()))?;
        std::fs::write(path, json)?;
    } else {
        table
            .write_csv(File::create(path)?)
            .map_err(|e| GrowthError::Serialization(e.to_string()))?;
    }
    Ok(())
}

/// Human-readable overview plus the last `tail` rows.
pub fn summary(table: &FeatureTable, tail: usize) -> String {
    let report = &table.report;
    let mut out = String::new();

    out.push_str(&format!(
        "{}: {}% growth within {} trading days\n",
        table.symbol, table.target_percent, table.lookahead_days
    ));
    out.push_str(&format!(
        "Rows: {} of {} days (warm-up {}, lookahead {}, undefined {})\n",
        report.output_rows,
        report.input_rows,
        report.warmup_rows,
        report.lookahead_rows,
        report.degenerate_rows
    ));
    out.push_str(&format!(
        "Positive labels: {} ({:.1}%)\n",
        table.positives(),
        table.positive_share() * 100.0
    ));
    for window in &report.degenerate {
        out.push_str(&format!(
            "Undefined {}: {} rows\n",
            window.indicator, window.rows
        ));
    }

    let rows = table.tail(tail);
    if !rows.is_empty() {
        out.push('\n');
        out.push_str(&format!(
            "{:<10} {:>10} {:>7} {:>6} {:>9} {:>7} {:>8} {:>9} {:>5}\n",
            "date", "adj_close", "rsi_14", "stoch", "macd", "aroon", "will_r", "bull", "label"
        ));
        for row in rows {
            out.push_str(&format!(
                "{:<10} {:>10.2} {:>7.2} {:>6.3} {:>9.3} {:>7.1} {:>8.2} {:>9.3} {:>5}\n",
                row.date(),
                row.adj_close,
                row.rsi_14,
                row.stoch_rsi,
                row.macd,
                row.aroon,
                row.williams_r,
                row.bull_power,
                row.label
            ));
        }
    }

    out
}
