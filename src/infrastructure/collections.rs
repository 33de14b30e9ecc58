//! Typed access to whole-collection documents

use crate::error::{BoardError, Result};
use crate::infrastructure::codec::{decode, encode};
use crate::infrastructure::KeyValueStore;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const TASKS_KEY: &str = "tasksRemote";
pub const CATEGORIES_KEY: &str = "categoryRemote";
pub const CONTACTS_KEY: &str = "contactsRemote";
pub const USERS_KEY: &str = "usersRemote";

/// Read and parse the collection stored under `key`.
pub fn load<T, S>(store: &S, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let value = store.get_item(key)?;
    let items = decode(&value)?;
    debug!("event=load key={} items={}", key, items.len());
    Ok(items)
}

/// Like [`load`], but a key that was never written reads as empty.
pub fn load_or_empty<T, S>(store: &S, key: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match load(store, key) {
        Err(BoardError::KeyNotFound(_)) => {
            info!("event=load key={} status=missing items=0", key);
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Write the whole collection under `key`.
pub fn save<T, S>(store: &S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let value = encode(items)?;
    store.set_item(key, &value)?;
    debug!("event=save key={} items={}", key, items.len());
    Ok(())
}

/// Whether a document exists under `key`.
pub fn exists<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<bool> {
    match store.get_item(key) {
        Ok(_) => Ok(true),
        Err(BoardError::KeyNotFound(_)) => Ok(false),
        Err(e) => Err(e),
    }
}
