//! Subtasks nested inside a task

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubtaskStatus {
    Done,
    InProgress,
}

impl SubtaskStatus {
    /// Status from the state of its checkbox.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            SubtaskStatus::Done
        } else {
            SubtaskStatus::InProgress
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, SubtaskStatus::Done)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub name: String,
    pub status: SubtaskStatus,
}

impl Subtask {
    pub fn new(name: &str, checked: bool) -> Self {
        Subtask {
            name: name.to_string(),
            status: SubtaskStatus::from_checked(checked),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }
}
