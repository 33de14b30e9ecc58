//! taskboard - Kanban task board backed by a key-value store
//!
//! Tasks, categories, contacts and users live as whole-collection documents
//! in a key-value store. Every change reads a collection, modifies it in
//! memory and writes the complete collection back.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BoardError;
