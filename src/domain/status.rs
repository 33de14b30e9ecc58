//! Board columns a task can sit in

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column of the board a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    AwaitingFeedback,
    Done,
}

impl TaskStatus {
    /// All columns in board order
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::AwaitingFeedback,
        TaskStatus::Done,
    ];

    /// Name used in stored documents and card ids
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::AwaitingFeedback => "awaitingFeedback",
            TaskStatus::Done => "done",
        }
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::AwaitingFeedback => "Awaiting feedback",
            TaskStatus::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "inprogress" => Ok(TaskStatus::InProgress),
            "awaitingfeedback" => Ok(TaskStatus::AwaitingFeedback),
            "done" => Ok(TaskStatus::Done),
            _ => Err(format!(
                "Invalid status: '{}'. Valid statuses are: todo, inProgress, awaitingFeedback, done",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wire_names() {
        for status in TaskStatus::ALL {
            assert_eq!(TaskStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_parse_kebab_and_case() {
        assert_eq!(
            TaskStatus::from_str("in-progress").unwrap(),
            TaskStatus::InProgress
        );
        assert_eq!(
            TaskStatus::from_str("Awaiting-Feedback").unwrap(),
            TaskStatus::AwaitingFeedback
        );
        assert_eq!(TaskStatus::from_str("TODO").unwrap(), TaskStatus::Todo);
    }

    #[test]
    fn test_parse_invalid() {
        let err = TaskStatus::from_str("archived").unwrap_err();
        assert!(err.contains("Invalid status"));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&TaskStatus::AwaitingFeedback).unwrap();
        assert_eq!(json, "\"awaitingFeedback\"");
        let parsed: TaskStatus = serde_json::from_str("\"inProgress\"").unwrap();
        assert_eq!(parsed, TaskStatus::InProgress);
    }
}
