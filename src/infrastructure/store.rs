//! Key-value storage backends
//!
//! Every backend offers the same two primitives: read the string stored
//! under a key, and replace it. Collections are always written whole.

use crate::error::{BoardError, Result};
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

/// Default endpoint of the hosted key-value service.
pub const DEFAULT_STORAGE_URL: &str = "https://remote-storage.developerakademie.org/item";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Abstract string store keyed by document name
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<String>;

    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }
}

#[derive(Debug, Serialize)]
struct SetItemRequest<'a> {
    key: &'a str,
    value: &'a str,
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct StoreResponse {
    #[serde(default)]
    status: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<StoredItem>,
}

#[derive(Debug, Deserialize)]
struct StoredItem {
    #[serde(default)]
    value: Option<serde_json::Value>,
}

impl StoreResponse {
    fn is_error(&self) -> bool {
        self.status.as_ref().and_then(|s| s.as_str()) == Some("error")
    }
}

/// Hosted store reached over HTTP with a static token.
pub struct RemoteStore {
    url: String,
    token: String,
    http: Client,
}

impl RemoteStore {
    pub fn new(url: &str, token: &str) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(RemoteStore {
            url: url.to_string(),
            token: token.to_string(),
            http,
        })
    }
}

impl KeyValueStore for RemoteStore {
    fn get_item(&self, key: &str) -> Result<String> {
        debug!("event=get_item backend=remote key={}", key);
        let resp = self
            .http
            .get(&self.url)
            .query(&[("key", key), ("token", self.token.as_str())])
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            return Err(BoardError::Storage(format!(
                "GET {} returned {}: {}",
                key, status, text
            )));
        }

        let body: StoreResponse = serde_json::from_str(&text)?;
        if body.is_error() {
            return Err(BoardError::Storage(format!(
                "GET {} rejected: {}",
                key,
                body.message.unwrap_or_default()
            )));
        }
        match body.data.and_then(|d| d.value) {
            Some(serde_json::Value::String(value)) => Ok(value),
            // Documents written as raw JSON rather than a string
            Some(other) => Ok(other.to_string()),
            None => Err(BoardError::KeyNotFound(key.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        debug!(
            "event=set_item backend=remote key={} bytes={}",
            key,
            value.len()
        );
        let payload = SetItemRequest {
            key,
            value,
            token: &self.token,
        };
        let resp = self.http.post(&self.url).json(&payload).send()?;

        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            return Err(BoardError::Storage(format!(
                "POST {} returned {}: {}",
                key, status, text
            )));
        }

        if let Ok(body) = serde_json::from_str::<StoreResponse>(&text) {
            if body.is_error() {
                return Err(BoardError::Storage(format!(
                    "POST {} rejected: {}",
                    key,
                    body.message.unwrap_or_default()
                )));
            }
        }

        Ok(())
    }
}

/// Store keeping one file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BoardError::InvalidValue(format!("Invalid store key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.txt", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<String> {
        debug!("event=get_item backend=local key={}", key);
        let path = self.path_for(key)?;
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BoardError::KeyNotFound(key.to_string())
            } else {
                BoardError::Io(e)
            }
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        debug!(
            "event=set_item backend=local key={} bytes={}",
            key,
            value.len()
        );
        let path = self.path_for(key)?;
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        // Write next to the target and rename over it, so a failed write
        // never leaves a truncated document behind.
        let tmp_path = self
            .dir
            .join(format!("{}.txt.tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, value)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BoardError::Io(e));
        }
        Ok(())
    }
}

/// In-process store, handy for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<String> {
        let items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items
            .get(key)
            .cloned()
            .ok_or_else(|| BoardError::KeyNotFound(key.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.set_item("tasksRemote", "[]").unwrap();
        assert_eq!(store.get_item("tasksRemote").unwrap(), "[]");
    }

    #[test]
    fn test_memory_store_missing_key() {
        let store = MemoryStore::new();
        match store.get_item("usersRemote").unwrap_err() {
            BoardError::KeyNotFound(key) => assert_eq!(key, "usersRemote"),
            other => panic!("Expected KeyNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_file_store_creates_directory() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("store"));
        store.set_item("categoryRemote", "[{'name':'sales'}]").unwrap();

        assert!(temp.path().join("store/categoryRemote.txt").exists());
        assert_eq!(
            store.get_item("categoryRemote").unwrap(),
            "[{'name':'sales'}]"
        );
    }

    #[test]
    fn test_file_store_overwrites_whole_value() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.set_item("tasksRemote", "[1,2,3]").unwrap();
        store.set_item("tasksRemote", "[]").unwrap();
        assert_eq!(store.get_item("tasksRemote").unwrap(), "[]");
    }

    #[test]
    fn test_file_store_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.set_item("tasksRemote", "[{'title':'a'}]").unwrap();
        store.set_item("tasksRemote", "[{'title':'b'}]").unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["tasksRemote.txt".to_string()]);
        assert_eq!(store.get_item("tasksRemote").unwrap(), "[{'title':'b'}]");
    }

    #[test]
    fn test_file_store_keeps_old_document_when_write_fails() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        store.set_item("tasksRemote", "[1]").unwrap();

        // A directory squatting on the temp name makes the write fail.
        let tmp_name = format!("tasksRemote.txt.tmp-{}", std::process::id());
        fs::create_dir(temp.path().join(&tmp_name)).unwrap();

        assert!(store.set_item("tasksRemote", "[2]").is_err());
        assert_eq!(store.get_item("tasksRemote").unwrap(), "[1]");
    }

    #[test]
    fn test_file_store_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(matches!(
            store.get_item("tasksRemote"),
            Err(BoardError::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(store.set_item("../escape", "[]").is_err());
        assert!(store.get_item("").is_err());
    }

    #[test]
    fn test_boxed_store_delegates() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap(), "v");
    }

    #[test]
    fn test_store_response_parsing() {
        let ok: StoreResponse = serde_json::from_str(
            r#"{"status":"success","data":{"key":"tasksRemote","value":"[]"}}"#,
        )
        .unwrap();
        assert!(!ok.is_error());
        assert_eq!(
            ok.data.and_then(|d| d.value),
            Some(serde_json::Value::String("[]".to_string()))
        );

        let err: StoreResponse =
            serde_json::from_str(r#"{"status":"error","message":"Invalid token"}"#).unwrap();
        assert!(err.is_error());
        assert!(err.data.is_none());
    }
}
