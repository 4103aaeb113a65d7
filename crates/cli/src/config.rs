//! CLI configuration
//!
//! Precedence: flags > `CONTRATO_*` environment variables > optional TOML
//! file under the platform config dir.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// Backend base URL, including the `/api` prefix
    pub api_url: String,
    /// Where the session document lives; platform data dir when unset
    pub data_dir: Option<PathBuf>,
}

/// Resolve the effective configuration
pub fn load(api_url_flag: Option<String>, data_dir_flag: Option<PathBuf>) -> Result<CliConfig> {
    let mut builder = Config::builder()
        .set_default("api_url", DEFAULT_API_URL)?
        .set_default("data_dir", None::<String>)?;

    if let Some(path) = config_file_path() {
        builder = builder.add_source(File::from(path).required(false));
    }

    builder = builder.add_source(Environment::with_prefix("CONTRATO"));

    if let Some(url) = api_url_flag {
        builder = builder.set_override("api_url", url)?;
    }
    if let Some(dir) = data_dir_flag {
        builder = builder.set_override("data_dir", dir.to_string_lossy().to_string())?;
    }

    let config: CliConfig = builder
        .build()
        .context("falha ao montar configuração")?
        .try_deserialize()
        .context("configuração inválida")?;

    Ok(config)
}

fn config_file_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "contratomais", "contrato")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
