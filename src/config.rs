use config as config_rs;
use std::fs;
use thiserror::Error;

use crate::table::{builtin_table, Replacement};

#[derive(Debug)]
pub struct AppConfig {
    pub table: Vec<Replacement>,
    pub table_source: TableSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Builtin,
    File(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(#[from] config_rs::ConfigError),
    #[error("replacement table {0} is empty")]
    EmptyTable(String),
}

/// Resolves the replacement table: `--table` flag over the MOJIFIX_TABLE
/// environment variable over the built-in table.
pub fn load_config(table_flag: &Option<String>) -> Result<AppConfig, ConfigError> {
    let mut builder = config_rs::Config::builder();

    if let Ok(path) = std::env::var("MOJIFIX_TABLE") {
        builder = builder.set_override("table_path", path)?;
    }
    // CLI flag takes precedence
    if let Some(path) = table_flag {
        builder = builder.set_override("table_path", path.clone())?;
    }

    let cfg = builder.build()?;

    match cfg.get::<String>("table_path") {
        Ok(path) => {
            let table = load_table(&path)?;
            Ok(AppConfig {
                table,
                table_source: TableSource::File(path),
            })
        }
        Err(config_rs::ConfigError::NotFound(_)) => Ok(AppConfig {
            table: builtin_table(),
            table_source: TableSource::Builtin,
        }),
        Err(e) => Err(e.into()),
    }
}

/// Loads an ordered table from a JSON array of `{pattern, replacement}`
/// objects. Order in the file is the order the entries run.
pub fn load_table(path: &str) -> Result<Vec<Replacement>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let table: Vec<Replacement> = serde_json::from_str(&content)?;
    if table.is_empty() {
        return Err(ConfigError::EmptyTable(path.to_string()));
    }
    Ok(table)
}
