//! Board workspace: a directory holding `.taskboard/config.toml`
//!
//! A workspace is always opened together with its configuration, so every
//! command that finds a board also knows which store backs it.

use crate::error::{BoardError, Result};
use crate::infrastructure::config::BOARD_DIR;
use crate::infrastructure::{Config, KeyValueStore};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
    config: Config,
}

impl Workspace {
    /// Create `.taskboard` under `root` and write `config` into it.
    ///
    /// Fails when the directory already holds a board.
    pub fn create(root: &Path, config: Config) -> Result<Self> {
        let board_dir = root.join(BOARD_DIR);
        if board_dir.exists() {
            return Err(BoardError::Config(format!(
                "Directory already initialized: {}",
                root.display()
            )));
        }

        fs::create_dir_all(&board_dir)?;
        config.save_to_dir(root)?;
        Ok(Workspace {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Open the board rooted exactly at `root`
    pub fn open(root: &Path) -> Result<Self> {
        let config = Config::load_from_dir(root)?;
        debug!(
            "event=open_workspace root={} backend={}",
            root.display(),
            config.backend
        );
        Ok(Workspace {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Open the board named by TASKBOARD_ROOT, or the nearest one above the
    /// current directory.
    pub fn discover() -> Result<Self> {
        match std::env::var_os("TASKBOARD_ROOT") {
            Some(root) => {
                let root = PathBuf::from(root);
                if !is_board(&root) {
                    return Err(BoardError::Config(format!(
                        "TASKBOARD_ROOT is set to '{}' but no .taskboard directory found. \
                        Run 'taskboard init' in that directory or unset TASKBOARD_ROOT.",
                        root.display()
                    )));
                }
                Self::open(&root)
            }
            None => Self::open(&find_root(&std::env::current_dir()?)?),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration and write it to disk
    pub fn update_config(&mut self, config: Config) -> Result<()> {
        config.save_to_dir(&self.root)?;
        self.config = config;
        Ok(())
    }

    /// Store backing this board
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        self.config.open_store(&self.root)
    }
}

/// Nearest directory at or above `start` that holds a board
pub fn find_root(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_board(dir))
        .map(Path::to_path_buf)
        .ok_or_else(|| BoardError::NotBoardDirectory(start.to_path_buf()))
}

fn is_board(dir: &Path) -> bool {
    dir.join(BOARD_DIR).is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::Backend;
    use std::ffi::OsString;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests that touch process environment and puts the touched
    /// variables back on drop.
    struct EnvGuard {
        saved: Vec<(&'static str, Option<OsString>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard {
                saved: Vec::new(),
                _lock: ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner()),
            }
        }

        fn set(&mut self, key: &'static str, value: Option<&Path>) {
            if !self.saved.iter().any(|(k, _)| *k == key) {
                self.saved.push((key, std::env::var_os(key)));
            }
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in self.saved.drain(..) {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn test_create_writes_config() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::create(temp.path(), Config::new(Backend::Remote)).unwrap();

        assert_eq!(workspace.config().backend, Backend::Remote);
        assert!(temp.path().join(".taskboard/config.toml").is_file());
        assert_eq!(
            Workspace::open(temp.path()).unwrap().config().backend,
            Backend::Remote
        );
    }

    #[test]
    fn test_create_twice_fails() {
        let temp = TempDir::new().unwrap();
        Workspace::create(temp.path(), Config::default()).unwrap();

        match Workspace::create(temp.path(), Config::default()).unwrap_err() {
            BoardError::Config(msg) => assert!(msg.contains("already initialized")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_find_root_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        Workspace::create(temp.path(), Config::default()).unwrap();

        let deep = temp.path().join("sprint").join("week-1");
        fs::create_dir_all(&deep).unwrap();

        assert_eq!(find_root(&deep).unwrap(), temp.path());
    }

    #[test]
    fn test_find_root_without_board() {
        let temp = TempDir::new().unwrap();

        match find_root(temp.path()).unwrap_err() {
            BoardError::NotBoardDirectory(path) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotBoardDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_update_config_persists() {
        let temp = TempDir::new().unwrap();
        let mut workspace = Workspace::create(temp.path(), Config::default()).unwrap();

        let mut config = workspace.config().clone();
        config.log_level = "debug".to_string();
        workspace.update_config(config).unwrap();

        assert_eq!(workspace.config().log_level, "debug");
        assert_eq!(
            Workspace::open(temp.path()).unwrap().config().log_level,
            "debug"
        );
    }

    #[test]
    fn test_local_store_lives_under_board_dir() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::create(temp.path(), Config::new(Backend::Local)).unwrap();

        workspace
            .open_store()
            .unwrap()
            .set_item("tasksRemote", "[]")
            .unwrap();

        assert!(temp.path().join(".taskboard/store/tasksRemote.txt").exists());
    }

    #[test]
    fn test_remote_store_requires_token() {
        let mut env = EnvGuard::new();
        env.set("TASKBOARD_TOKEN", None);

        let temp = TempDir::new().unwrap();
        let workspace = Workspace::create(temp.path(), Config::new(Backend::Remote)).unwrap();

        match workspace.open_store() {
            Err(BoardError::Config(msg)) => assert!(msg.contains("storage token")),
            Err(other) => panic!("Expected Config error, got {:?}", other),
            Ok(_) => panic!("Expected Config error, got a store"),
        }
    }

    #[test]
    fn test_token_env_overrides_config() {
        let mut env = EnvGuard::new();

        let mut config = Config::new(Backend::Remote);
        config.token = Some("FROM-FILE".to_string());

        env.set("TASKBOARD_TOKEN", Some(Path::new("FROM-ENV")));
        assert_eq!(config.get_token().as_deref(), Some("FROM-ENV"));

        env.set("TASKBOARD_TOKEN", None);
        assert_eq!(config.get_token().as_deref(), Some("FROM-FILE"));
    }

    #[test]
    fn test_discover_with_root_env() {
        let mut env = EnvGuard::new();
        let temp = TempDir::new().unwrap();
        Workspace::create(temp.path(), Config::default()).unwrap();
        env.set("TASKBOARD_ROOT", Some(temp.path()));

        assert_eq!(Workspace::discover().unwrap().root(), temp.path());
    }

    #[test]
    fn test_discover_root_env_without_board() {
        let mut env = EnvGuard::new();
        let temp = TempDir::new().unwrap();
        env.set("TASKBOARD_ROOT", Some(temp.path()));

        match Workspace::discover().unwrap_err() {
            BoardError::Config(msg) => assert!(msg.contains("no .taskboard directory")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
