//! Application configuration management.
//!
//! Configuration covers the API origin and the login path, stored at
//! `<config_dir>/boxoffice/config.json`. The API origin can be overridden
//! with the `BOXOFFICE_API_URL` environment variable (also honored from a
//! `.env` file loaded at startup).

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "boxoffice";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Session store file name
const SESSION_FILE: &str = "session.json";

/// Environment variable overriding the API origin
const API_URL_ENV: &str = "BOXOFFICE_API_URL";

/// Default API origin (the document-origin analog for a local deployment)
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path the client navigates to after logout
pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub login_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.is_empty() {
                config.api_base_url = url;
            }
        }
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Location of the session store backing file.
    pub fn store_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(SESSION_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.login_path, "/login");
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = Config {
            api_base_url: "https://tickets.example.com".to_string(),
            login_path: "/signin".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.api_base_url, config.api_base_url);
        assert_eq!(parsed.login_path, config.login_path);
    }
}
