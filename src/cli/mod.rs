//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "growth")]
#[command(
    author,
    version,
    about = "Technical-indicator feature tables with forward growth labels"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the config file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the labeled feature table for one symbol
    Features(FeaturesArgs),
    /// Label one symbol against several growth targets
    Sweep(SweepArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

#[derive(clap::Args)]
pub struct FeaturesArgs {
    /// Ticker symbol
    #[arg(short = 'S', long)]
    pub symbol: String,

    /// Target growth in percent (defaults to the configured target)
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<i32>,

    /// Trading days to look ahead for the target
    #[arg(long)]
    pub lookahead: Option<usize>,

    /// CSV file or directory to read instead of the configured provider
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Save the table to file (JSON for `.json`, CSV otherwise)
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Rows shown by the text output
    #[arg(long, default_value = "5")]
    pub tail: usize,
}

#[derive(clap::Args)]
pub struct SweepArgs {
    /// Ticker symbol
    #[arg(short = 'S', long)]
    pub symbol: String,

    /// Target growths in percent (comma-separated)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        required = true,
        allow_negative_numbers = true
    )]
    pub targets: Vec<i32>,

    /// Trading days to look ahead for the target
    #[arg(long)]
    pub lookahead: Option<usize>,

    /// CSV file or directory to read instead of the configured provider
    #[arg(long)]
    pub data: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sweep_targets() {
        let cli = Cli::parse_from(["growth", "sweep", "-S", "SPY", "--targets", "1,3,-2"]);

        match cli.command {
            Commands::Sweep(args) => {
                assert_eq!(args.symbol, "SPY");
                assert_eq!(args.targets, vec![1, 3, -2]);
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn test_parse_features_defaults() {
        let cli = Cli::parse_from(["growth", "--log-level", "debug", "features", "--symbol", "AAPL"]);

        assert!(matches!(cli.log_level, Some(LogLevel::Debug)));
        match cli.command {
            Commands::Features(args) => {
                assert!(args.target.is_none());
                assert!(matches!(args.output, OutputFormat::Text));
                assert_eq!(args.tail, 5);
            }
            _ => panic!("expected features"),
        }
    }
}
