//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, DataProvider, DataSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Environment variable prefix; `GROWTH__PIPELINE__TARGET_PERCENT=8` overrides
/// `pipeline.target_percent`.
pub const ENV_PREFIX: &str = "GROWTH";

/// Load configuration from file and environment.
///
/// A missing file is not an error: defaults apply, then environment
/// overrides.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("/definitely/not/here.toml")).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let path = std::env::temp_dir().join(format!("growth-config-{}.toml", std::process::id()));
        fs::write(
            &path,
            r#"
[logging]
level = "debug"

[data]
provider = "csv"
csv_dir = "./data"

[pipeline]
target_percent = 8

[pipeline.windows]
aroon = 20
"#,
        )
        .unwrap();

        let config = load_config(&path);
        fs::remove_file(&path).ok();
        let config = config.unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.data.provider, DataProvider::Csv);
        assert_eq!(config.data.csv_dir.as_deref(), Some("./data"));
        assert_eq!(config.pipeline.target_percent, 8);
        assert_eq!(config.pipeline.lookahead_days, 30);
        assert_eq!(config.pipeline.windows.aroon, 20);
        assert_eq!(config.pipeline.windows.rsi, 14);
    }
}
