use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8444".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Raw submissions and their CSV transcodes land here.
    #[serde(default = "default_received_dir")]
    pub received_dir: PathBuf,
    /// Generated map documents land here and are served under /maps.
    #[serde(default = "default_maps_dir")]
    pub maps_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            received_dir: default_received_dir(),
            maps_dir: default_maps_dir(),
        }
    }
}

fn default_received_dir() -> PathBuf {
    PathBuf::from("received_data")
}

fn default_maps_dir() -> PathBuf {
    PathBuf::from("created_maps")
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_sections() {
        let config: Config = serde_yaml::from_str("web:\n  bind: 127.0.0.1:9000\n").unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:9000");
        assert_eq!(config.storage.received_dir, PathBuf::from("received_data"));
        assert_eq!(config.storage.maps_dir, PathBuf::from("created_maps"));
    }
}
