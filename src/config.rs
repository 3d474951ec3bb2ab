use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::CliError;

pub const DEFAULT_ENDPOINT: &str = "https://api.softlayer.com/rest/v3.1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            api_key: None,
            endpoint_url: default_endpoint(),
            timeout: default_timeout(),
            log_file: None,
        }
    }
}

/// Credentials required to talk to the API.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub api_key: String,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("slcli")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".slcli")
        };
        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (if any) and apply environment overrides.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        debug!("Loading config from: {:?}", path);
        if !path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;
        Ok(config)
    }

    /// Overlay `SL_*` variables. The lookup is injected so tests need not touch the process env.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(username) = lookup("SL_USERNAME") {
            self.username = Some(username);
        }
        if let Some(api_key) = lookup("SL_API_KEY") {
            self.api_key = Some(api_key);
        }
        if let Some(endpoint) = lookup("SL_ENDPOINT_URL") {
            self.endpoint_url = endpoint;
        }
        if let Some(timeout) = lookup("SL_TIMEOUT") {
            self.timeout = timeout
                .parse()
                .map_err(|_| CliError::Config(format!("SL_TIMEOUT must be a number of seconds, got '{}'", timeout)))?;
        }
        Ok(())
    }

    pub fn credentials(&self) -> Result<Credentials, CliError> {
        match (&self.username, &self.api_key) {
            (Some(username), Some(api_key)) if !username.is_empty() && !api_key.is_empty() => {
                Ok(Credentials {
                    username: username.clone(),
                    api_key: api_key.clone(),
                })
            }
            _ => Err(CliError::Config(
                "No API credentials configured. Set SL_USERNAME and SL_API_KEY or add them to the config file.".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.endpoint_url, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, 120);
        assert!(config.credentials().is_err());
    }

    #[test]
    fn test_file_then_env_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "username = \"alice\"\napi_key = \"abc\"\ntimeout = 30\n").unwrap();

        let mut config = Config::load_from(&path).unwrap();
        assert_eq!(config.timeout, 30);

        let env: HashMap<&str, &str> = [("SL_API_KEY", "override"), ("SL_TIMEOUT", "5")].into();
        config.apply_env(|k| env.get(k).map(|v| v.to_string())).unwrap();

        let creds = config.credentials().unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.api_key, "override");
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_bad_timeout_env() {
        let mut config = Config::default();
        let result = config.apply_env(|k| (k == "SL_TIMEOUT").then(|| "soon".to_string()));
        assert!(result.is_err());
    }
}
