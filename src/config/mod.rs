mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const OLLAMA_API_URL_ENV: &str = "OLLAMA_API_URL";
pub const PORT_ENV: &str = "PORT";

/// Loads `CONFIG_PATH` (default `config.yaml`) and applies environment overrides.
pub async fn load() -> Result<Config> {
    let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_file(&config_path).await?;
    config.apply_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

/// Reads a YAML config file. A missing file yields the defaults.
pub async fn load_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    Config::from_yaml(&config_str)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Applies `OLLAMA_API_URL` and `PORT` using `lookup` as the environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(OLLAMA_API_URL_ENV) {
            self.ollama.base_url = Some(url);
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid {}: '{}'", PORT_ENV, port)))?;
        }

        // Blank counts as unset
        if self
            .ollama
            .base_url
            .as_deref()
            .is_some_and(|url| url.trim().is_empty())
        {
            self.ollama.base_url = None;
        }

        Ok(())
    }
}
