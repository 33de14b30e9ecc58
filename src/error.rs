//! Error types for taskboard

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the taskboard application
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Not a taskboard directory: {0}")]
    NotBoardDirectory(PathBuf),

    #[error("Task not found: {0}")]
    TaskNotFound(usize),

    #[error("Category not found: {0}")]
    CategoryNotFound(usize),

    #[error("Unknown contact: {0}")]
    UnknownContact(String),

    #[error("Please fill missing informations: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Key not found in store: {0}")]
    KeyNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BoardError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BoardError::NotBoardDirectory(_) => 2,
            BoardError::TaskNotFound(_) | BoardError::CategoryNotFound(_) => 3,
            BoardError::MissingFields(_) => 4,
            BoardError::KeyNotFound(_) | BoardError::Storage(_) | BoardError::Http(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BoardError::NotBoardDirectory(path) => {
                format!(
                    "Not a taskboard directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'taskboard init' in this directory to create a new board\n\
                    • Navigate to an existing taskboard directory\n\
                    • Set TASKBOARD_ROOT environment variable to your board path",
                    path.display()
                )
            }
            BoardError::TaskNotFound(index) => {
                format!(
                    "No task at index {}\n\n\
                    Suggestions:\n\
                    • Use 'taskboard show' to see task indexes\n\
                    • Indexes shift after a task is deleted",
                    index
                )
            }
            BoardError::MissingFields(fields) => {
                format!(
                    "Please fill missing informations: {}\n\n\
                    A task needs a category, a priority and at least one assigned contact.\n\
                    Example: taskboard add --title 'Call clients' --category sales \
                    --priority urgent --assign Nicole",
                    fields.join(", ")
                )
            }
            BoardError::UnknownContact(name) => {
                format!(
                    "Unknown contact: '{}'\n\n\
                    Use 'taskboard contacts' to list the available contacts",
                    name
                )
            }
            BoardError::KeyNotFound(key) => {
                format!(
                    "Key not found in store: '{}'\n\n\
                    Suggestions:\n\
                    • Seed the store: taskboard init --seed\n\
                    • Check the storage token: taskboard config token",
                    key
                )
            }
            BoardError::InvalidValue(msg) => {
                if msg.contains("priority") {
                    format!("{}\n\nValid priorities: urgent, medium, low", msg)
                } else if msg.contains("status") {
                    format!(
                        "{}\n\nValid statuses: todo, inProgress, awaitingFeedback, done",
                        msg
                    )
                } else if msg.contains("color") {
                    format!(
                        "{}\n\n\
                        Expected format: #RRGGBB or rgb(r, g, b)\n\
                        Example: taskboard category add Research '#9327FF'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BoardError
pub type Result<T> = std::result::Result<T, BoardError>;
