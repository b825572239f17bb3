use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_service_name() -> String {
    "admin-console".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        load_layered("configuration", "APP")
    }
}

/// Load `T` from an optional config file (any format the `config` crate
/// recognises by extension) overlaid with `{prefix}__*` environment variables.
pub fn load_layered<T: DeserializeOwned>(file: &str, prefix: &str) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let config = Cfg::builder()
        .add_source(File::with_name(file).required(false))
        .add_source(Environment::with_prefix(prefix).separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}
