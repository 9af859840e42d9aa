//! Validate configuration command.

use anyhow::{Context, Result};
use growth_config::{AppConfig, DataProvider};
use growth_features::FeaturePipeline;
use std::path::Path;

pub async fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("File not found, using defaults and environment overrides");
    }

    let pipeline = FeaturePipeline::new(config.pipeline).context("Invalid pipeline section")?;
    if config.data.provider == DataProvider::Csv && config.data.csv_dir.is_none() {
        anyhow::bail!("data.csv_dir must be set when data.provider = \"csv\"");
    }

    println!("Configuration is valid!");
    println!(
        "Each table needs at least {} trading days of history",
        pipeline.params().required_history()
    );
    println!();
    print!("{}", toml::to_string_pretty(config)?);

    Ok(())
}
