use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::warn;

const APP_NAME: &str = "anoki";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    pub default_limit: usize,
    pub related_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    pub min_step_ms: u64,
    pub max_step_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    Minimal,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub style: OutputStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub recommendations: RecommendationConfig,
    pub execution: ExecutionConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: StorageBackend::Sqlite,
                path: None,
            },
            recommendations: RecommendationConfig {
                default_limit: 4,
                related_limit: 3,
            },
            execution: ExecutionConfig {
                min_step_ms: 1000,
                max_step_ms: 3000,
            },
            output: OutputConfig {
                style: OutputStyle::Minimal,
            },
        }
    }
}

impl Config {
    pub fn history_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(crate::storage::get_db_path)
    }
}

pub fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join("config.toml")
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

pub fn load_config() -> Config {
    let path = get_config_path();
    if path.exists() {
        if let Ok(content) = fs::read_to_string(&path) {
            match parse_config(&content) {
                Ok(config) => return config,
                Err(e) => warn!(error = %e, path = %path.display(), "invalid config, using defaults"),
            }
        }
    }
    Config::default()
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let config = parse_config(&text).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.recommendations.default_limit, 4);
        assert_eq!(config.execution.max_step_ms, 3000);
        assert_eq!(config.output.style, OutputStyle::Minimal);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = parse_config(
            r#"
            [storage]
            backend = "memory"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.recommendations.related_limit, 3);
    }

    #[test]
    fn explicit_history_path_wins() {
        let config = parse_config(
            r#"
            [storage]
            backend = "sqlite"
            path = "/tmp/anoki-test.db"
            "#,
        )
        .unwrap();
        assert_eq!(config.history_path(), PathBuf::from("/tmp/anoki-test.db"));
    }

    #[test]
    fn invalid_backend_is_an_error() {
        assert!(parse_config("[storage]\nbackend = \"redis\"").is_err());
    }
}
