//! Infrastructure layer - Storage, configuration and logging

pub mod codec;
pub mod collections;
pub mod config;
pub mod logging;
pub mod store;
pub mod workspace;

pub use config::{Backend, Config};
pub use store::{FileStore, KeyValueStore, MemoryStore, RemoteStore};
pub use workspace::{find_root, Workspace};
