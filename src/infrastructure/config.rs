//! Configuration management

use crate::error::{BoardError, Result};
use crate::infrastructure::logging::DEFAULT_LOG_LEVEL;
use crate::infrastructure::store::DEFAULT_STORAGE_URL;
use crate::infrastructure::{FileStore, KeyValueStore, RemoteStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of the workspace directory holding config and local data
pub const BOARD_DIR: &str = ".taskboard";

/// Where the board documents live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Plain files under the workspace directory
    #[default]
    Local,
    /// Hosted key-value service
    Remote,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Local => f.write_str("local"),
            Backend::Remote => f.write_str("remote"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Backend::Local),
            "remote" => Ok(Backend::Remote),
            _ => Err(format!(
                "Invalid backend: '{}'. Valid backends are: local, remote",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Local store directory, relative to the workspace directory
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_url() -> String {
    DEFAULT_STORAGE_URL.to_string()
}

fn default_store_path() -> PathBuf {
    PathBuf::from("store")
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Backend::default())
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new(backend: Backend) -> Self {
        Config {
            backend,
            url: default_url(),
            token: None,
            path: default_store_path(),
            log_level: default_log_level(),
        }
    }

    /// Load config from .taskboard/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(BOARD_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BoardError::NotBoardDirectory(path.to_path_buf())
            } else {
                BoardError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| BoardError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .taskboard/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let board_dir = path.join(BOARD_DIR);
        let config_path = board_dir.join("config.toml");

        if !board_dir.exists() {
            fs::create_dir(&board_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Storage token, checking TASKBOARD_TOKEN first
    pub fn get_token(&self) -> Option<String> {
        std::env::var("TASKBOARD_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.token.clone())
    }

    /// Storage endpoint, checking TASKBOARD_URL first
    pub fn get_url(&self) -> String {
        std::env::var("TASKBOARD_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| self.url.clone())
    }

    /// Directory of the local store for a workspace rooted at `root`
    pub fn store_dir(&self, root: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            root.join(BOARD_DIR).join(&self.path)
        }
    }

    /// Open the configured storage backend
    pub fn open_store(&self, root: &Path) -> Result<Box<dyn KeyValueStore>> {
        match self.backend {
            Backend::Local => Ok(Box::new(FileStore::new(self.store_dir(root)))),
            Backend::Remote => {
                let token = self.get_token().ok_or_else(|| {
                    BoardError::Config(
                        "Remote backend needs a storage token. \
                        Set it with 'taskboard config token <TOKEN>' or TASKBOARD_TOKEN."
                            .to_string(),
                    )
                })?;
                Ok(Box::new(RemoteStore::new(&self.get_url(), &token)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new(Backend::Remote);
        assert_eq!(config.backend, Backend::Remote);
        assert_eq!(config.url, DEFAULT_STORAGE_URL);
        assert_eq!(config.token, None);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new(Backend::Remote);
        config.token = Some("SECRET".to_string());

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".taskboard").exists());
        assert!(temp.path().join(".taskboard/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            BoardError::NotBoardDirectory(_) => {}
            other => panic!("Expected NotBoardDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("backend = \"remote\"\n").unwrap();
        assert_eq!(config.backend, Backend::Remote);
        assert_eq!(config.url, DEFAULT_STORAGE_URL);
        assert_eq!(config.path, PathBuf::from("store"));
    }

    #[test]
    fn test_store_dir_relative_and_absolute() {
        let root = Path::new("/work/board");
        let mut config = Config::new(Backend::Local);
        assert_eq!(
            config.store_dir(root),
            PathBuf::from("/work/board/.taskboard/store")
        );

        config.path = PathBuf::from("/var/lib/taskboard");
        assert_eq!(config.store_dir(root), PathBuf::from("/var/lib/taskboard"));
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!(Backend::from_str("Remote").unwrap(), Backend::Remote);
        assert!(Backend::from_str("s3").is_err());
    }
}
