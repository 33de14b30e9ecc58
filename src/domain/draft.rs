//! State of the add/edit task form

use crate::domain::{Contact, Priority, Subtask, Task, TaskStatus};
use chrono::NaiveDate;

/// At most this many contacts can be assigned to one task.
pub const MAX_ASSIGNED: usize = 5;

/// One row of the subtask list in the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtaskEntry {
    pub name: String,
    pub checked: bool,
}

/// Everything the task form collects before it is turned into a [`Task`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    assigned: Vec<Contact>,
    subtasks: Vec<SubtaskEntry>,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str) -> Self {
        TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    /// Pre-fill the form from an existing task.
    pub fn from_task(task: &Task) -> Self {
        TaskDraft {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            priority: Some(task.priority),
            category: Some(task.category.clone()),
            assigned: task.assigned_to.clone(),
            subtasks: task
                .subtasks
                .iter()
                .map(|s| SubtaskEntry {
                    name: s.name.clone(),
                    checked: s.is_done(),
                })
                .collect(),
        }
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = Some(category.to_string());
    }

    pub fn assigned(&self) -> &[Contact] {
        &self.assigned
    }

    /// Add a contact; returns false when it was already assigned or the
    /// list is full.
    pub fn assign(&mut self, contact: &Contact) -> bool {
        if self.assigned.contains(contact) || self.assigned.len() >= MAX_ASSIGNED {
            return false;
        }
        self.assigned.push(contact.clone());
        true
    }

    /// Remove the first assigned contact with this name.
    pub fn unassign(&mut self, name: &str) -> bool {
        match self.assigned.iter().position(|c| c.name == name) {
            Some(pos) => {
                self.assigned.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn subtasks(&self) -> &[SubtaskEntry] {
        &self.subtasks
    }

    /// Append a subtask; blank names are ignored.
    pub fn add_subtask(&mut self, name: &str, checked: bool) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.subtasks.push(SubtaskEntry {
            name: name.to_string(),
            checked,
        });
        true
    }

    /// Tick or untick the subtask at `position`.
    pub fn set_checked(&mut self, position: usize, checked: bool) -> bool {
        match self.subtasks.get_mut(position) {
            Some(entry) => {
                entry.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Names of required fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.category.as_deref().map_or(true, |c| c.trim().is_empty()) {
            missing.push("category");
        }
        if self.assigned.is_empty() {
            missing.push("assigned contacts");
        }
        if self.priority.is_none() {
            missing.push("priority");
        }
        missing
    }

    /// Turn the form into a task placed in `status`.
    ///
    /// Returns the list of missing fields when category, priority or
    /// assignees are not filled in.
    pub fn into_task(self, status: TaskStatus) -> Result<Task, Vec<&'static str>> {
        let missing = self.missing_fields();
        let (Some(category), Some(priority)) = (self.category, self.priority) else {
            return Err(missing);
        };
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(Task {
            title: self.title,
            description: self.description,
            status,
            category,
            priority,
            subtasks: self
                .subtasks
                .iter()
                .map(|s| Subtask::new(&s.name, s.checked))
                .collect(),
            due_date: self.due_date,
            assigned_to: self.assigned,
        })
    }
}
