//! Config management use case

use crate::error::{BoardError, Result};
use crate::infrastructure::logging::normalize_level;
use crate::infrastructure::{Backend, Config, Workspace};
use std::path::PathBuf;
use std::str::FromStr;

const VALID_KEYS: &str = "backend, url, token, path, log_level";

/// Service for managing board configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.config();

        match key {
            "backend" => Ok(config.backend.to_string()),
            "url" => Ok(config.url.clone()),
            "token" => Ok(config.token.clone().unwrap_or_default()),
            "path" => Ok(config.path.display().to_string()),
            "log_level" => Ok(config.log_level.clone()),
            _ => Err(BoardError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.config().clone();

        match key {
            "backend" => {
                config.backend = Backend::from_str(value).map_err(BoardError::Config)?;
            }
            "url" => {
                if !value.starts_with("http://") && !value.starts_with("https://") {
                    return Err(BoardError::Config(format!(
                        "Invalid url: '{}'. Expected an http:// or https:// address",
                        value
                    )));
                }
                config.url = value.to_string();
            }
            "token" => {
                config.token = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            "path" => {
                config.path = PathBuf::from(value);
            }
            "log_level" => {
                config.log_level = normalize_level(value).map_err(BoardError::Config)?.to_string();
            }
            _ => {
                return Err(BoardError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.workspace.update_config(config)
    }

    /// List all config values
    pub fn list(&self) -> &Config {
        self.workspace.config()
    }
}
