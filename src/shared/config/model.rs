use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

#[derive(Debug, Deserialize)]
pub struct DataConfig {
    pub schema_path: String,
    pub data_path: String,
    /// Fact rows written by `generate` when `--rows` is not given
    #[serde(default = "default_generated_rows")]
    pub generated_rows: usize,
}

fn default_generated_rows() -> usize {
    10_000
}

#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    /// Run both evaluation paths and report the timing difference
    #[serde(default)]
    pub compare_paths: bool,
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            compare_paths: false,
            output_format: OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("BITFACT_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
