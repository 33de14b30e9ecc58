//! Initialize board use case

use crate::domain::{sample_tasks, seed_categories, seed_contacts, User};
use crate::error::Result;
use crate::infrastructure::collections::{self, CATEGORIES_KEY, CONTACTS_KEY, TASKS_KEY, USERS_KEY};
use crate::infrastructure::{Config, KeyValueStore, Workspace};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new board workspace at the specified path.
///
/// With `seed`, the configured store is filled with the sample board.
/// Returns the keys that were seeded.
pub fn init(path: &Path, config: &Config, seed: bool) -> Result<Vec<&'static str>> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = Workspace::create(path, config.clone())?;
    info!(
        "event=init root={} backend={}",
        path.display(),
        config.backend
    );

    if !seed {
        return Ok(Vec::new());
    }

    let store = workspace.open_store()?;
    seed_store(&store, false)
}

/// Write the sample tasks, the built-in categories and contacts and an
/// empty user list.
///
/// Keys that already hold a document are left alone unless `force` is set.
pub fn seed_store<S: KeyValueStore + ?Sized>(store: &S, force: bool) -> Result<Vec<&'static str>> {
    let mut seeded = Vec::new();

    if force || !collections::exists(store, TASKS_KEY)? {
        collections::save(store, TASKS_KEY, &sample_tasks())?;
        seeded.push(TASKS_KEY);
    }
    if force || !collections::exists(store, CATEGORIES_KEY)? {
        collections::save(store, CATEGORIES_KEY, &seed_categories())?;
        seeded.push(CATEGORIES_KEY);
    }
    if force || !collections::exists(store, CONTACTS_KEY)? {
        collections::save(store, CONTACTS_KEY, &seed_contacts())?;
        seeded.push(CONTACTS_KEY);
    }
    if force || !collections::exists(store, USERS_KEY)? {
        collections::save::<User, _>(store, USERS_KEY, &[])?;
        seeded.push(USERS_KEY);
    }

    info!("event=seed keys={:?}", seeded);
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::infrastructure::{Backend, MemoryStore};
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_workspace() {
        let temp = TempDir::new().unwrap();
        let seeded = init(temp.path(), &Config::new(Backend::Local), false).unwrap();

        assert!(seeded.is_empty());
        assert!(temp.path().join(".taskboard/config.toml").exists());
        assert!(!temp.path().join(".taskboard/store").exists());
    }

    #[test]
    fn test_init_with_seed_fills_local_store() {
        let temp = TempDir::new().unwrap();
        let seeded = init(temp.path(), &Config::new(Backend::Local), true).unwrap();

        assert_eq!(seeded, vec![TASKS_KEY, CATEGORIES_KEY, CONTACTS_KEY, USERS_KEY]);
        assert!(temp.path().join(".taskboard/store/tasksRemote.txt").exists());
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("nested").join("board");
        init(&target, &Config::new(Backend::Local), false).unwrap();
        assert!(target.join(".taskboard").is_dir());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), &Config::default(), false).unwrap();
        assert!(init(temp.path(), &Config::default(), false).is_err());
    }

    #[test]
    fn test_seed_keeps_existing_documents() {
        let store = MemoryStore::new();
        collections::save::<Task, _>(&store, TASKS_KEY, &[]).unwrap();

        let seeded = seed_store(&store, false).unwrap();
        assert!(!seeded.contains(&TASKS_KEY));

        let tasks: Vec<Task> = collections::load(&store, TASKS_KEY).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_seed_force_overwrites() {
        let store = MemoryStore::new();
        collections::save::<Task, _>(&store, TASKS_KEY, &[]).unwrap();

        seed_store(&store, true).unwrap();
        let tasks: Vec<Task> = collections::load(&store, TASKS_KEY).unwrap();
        assert_eq!(tasks.len(), 4);
    }
}
