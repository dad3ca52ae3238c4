//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Default GraphQL endpoint of a locally running backend
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/graphql";

/// Trackline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub graph: GraphConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graph: GraphConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                timeout_secs: 30,
            },
        }
    }
}

impl GraphConfig {
    /// Endpoint with the environment override applied.
    ///
    /// `TRACKLINE_GRAPHQL_URL` wins over the configured value so a
    /// deployment can repoint the client without touching the file.
    pub fn resolved_endpoint(&self) -> String {
        env::var("TRACKLINE_GRAPHQL_URL").unwrap_or_else(|_| self.endpoint.clone())
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("TRACKLINE_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("trackline")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(config)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.graph.endpoint.trim().is_empty() {
            return Err(anyhow!("graph.endpoint must not be empty"));
        }
        if self.graph.timeout_secs == 0 {
            return Err(anyhow!("graph.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}
