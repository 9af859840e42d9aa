//! Sweep command implementation.

use anyhow::{Context, Result};
use growth_config::AppConfig;
use growth_features::FeaturePipeline;
use tracing::info;

use super::{data_source, load_series, pipeline_params};
use crate::cli::SweepArgs;

pub async fn run(args: SweepArgs, config: &AppConfig) -> Result<()> {
    let params = pipeline_params(config.pipeline, None, args.lookahead);
    let pipeline = FeaturePipeline::new(params).context("Invalid pipeline parameters")?;

    let source = data_source(&config.data, args.data.as_deref())?;
    let series = load_series(source.as_ref(), &args.symbol)
        .await
        .with_context(|| format!("Failed to load daily history for {}", args.symbol))?;

    let frame = pipeline
        .indicators(&series)
        .with_context(|| format!("Failed to compute indicators for {}", args.symbol))?;
    info!("Sweeping {} targets for {}", args.targets.len(), args.symbol);

    println!(
        "{} over {} days, {} trading-day lookahead",
        args.symbol,
        series.len(),
        params.lookahead_days
    );
    println!("{:>8} {:>8} {:>10} {:>8}", "target", "rows", "positives", "share");
    for &target in &args.targets {
        let table = pipeline
            .label(&frame, target)
            .with_context(|| format!("Failed to label {} at {}%", args.symbol, target))?;
        println!(
            "{:>7}% {:>8} {:>10} {:>7.1}%",
            target,
            table.len(),
            table.positives(),
            table.positive_share() * 100.0
        );
    }

    Ok(())
}
