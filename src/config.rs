//! Configuration loading
//!
//! Reads `~/.config/triemaster/config.toml`. Every section is optional; a
//! missing default file yields the built-in defaults.

mod types;

pub use types::{
    BehaviorConfig, Config, ConsistencyMode, EnrichmentConfig, NetworkConfig, WordStoreConfig,
};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;

use crate::error::TrieError;

const CONFIG_DIR: &str = "triemaster";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from an explicit path or the default location
///
/// An explicit path must exist. The default path is allowed to be absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, TrieError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, TrieError> {
    let contents = fs::read_to_string(path)?;
    let config = parse_config_toml(&contents)?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config_toml(content: &str) -> Result<Config, TrieError> {
    let config: Config =
        toml::from_str(content).map_err(|e| TrieError::Config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), TrieError> {
        validate_url("word_store.base_url", &self.word_store.base_url)?;
        validate_url("enrichment.api_url", &self.enrichment.api_url)?;

        if self.enrichment.max_words == 0 {
            return Err(TrieError::Config(
                "enrichment.max_words must be greater than zero".to_string(),
            ));
        }
        if self.network.timeout_ms == 0 {
            return Err(TrieError::Config(
                "network.timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Upper bound for any single network call
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.network.timeout_ms)
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), TrieError> {
    let url = Url::parse(value).map_err(|e| TrieError::InvalidUrl {
        field,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(TrieError::InvalidUrl {
            field,
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
