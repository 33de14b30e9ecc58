//! Task board use cases: view, move, edit and delete tasks
//!
//! Every mutation changes the in-memory tasks, writes the whole tasks
//! document back and then re-reads it, so the board always shows what the
//! store holds.

use crate::domain::{Board, Category, SubtaskStatus, Task, TaskDraft, TaskStatus};
use crate::error::{BoardError, Result};
use crate::infrastructure::collections::{self, CATEGORIES_KEY, TASKS_KEY};
use crate::infrastructure::KeyValueStore;
use log::info;

/// Service owning the board state loaded from a store
pub struct BoardService<S> {
    store: S,
    board: Board,
}

impl<S: KeyValueStore> BoardService<S> {
    /// Load tasks and categories from the store
    pub fn open(store: S) -> Result<Self> {
        let mut service = BoardService {
            store,
            board: Board::default(),
        };
        service.reload()?;
        Ok(service)
    }

    /// Re-read both documents
    pub fn reload(&mut self) -> Result<()> {
        let tasks: Vec<Task> = collections::load_or_empty(&self.store, TASKS_KEY)?;
        let categories: Vec<Category> = collections::load_or_empty(&self.store, CATEGORIES_KEY)?;
        self.board = Board::new(tasks, categories);
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Task at `index` in the tasks document
    pub fn task(&self, index: usize) -> Result<&Task> {
        self.board
            .tasks
            .get(index)
            .ok_or(BoardError::TaskNotFound(index))
    }

    /// Put a task into another column
    pub fn move_task(&mut self, index: usize, status: TaskStatus) -> Result<()> {
        let task = self
            .board
            .tasks
            .get_mut(index)
            .ok_or(BoardError::TaskNotFound(index))?;
        let from = task.status;
        task.status = status;

        self.persist_tasks()?;
        info!(
            "event=move_task index={} from={} to={}",
            index, from, status
        );
        Ok(())
    }

    /// Remove a task from the board and return it
    pub fn delete_task(&mut self, index: usize) -> Result<Task> {
        if index >= self.board.tasks.len() {
            return Err(BoardError::TaskNotFound(index));
        }
        let removed = self.board.tasks.remove(index);

        self.persist_tasks()?;
        info!("event=delete_task index={} title={:?}", index, removed.title);
        Ok(removed)
    }

    /// Merge an edit form into the task at `index`.
    ///
    /// Title, description, due date, priority and assignees are taken from
    /// the form; status and category stay. Subtask names stay too, only
    /// their done state follows the form's checkboxes by position.
    pub fn save_changes(&mut self, index: usize, draft: &TaskDraft) -> Result<()> {
        let task = self
            .board
            .tasks
            .get_mut(index)
            .ok_or(BoardError::TaskNotFound(index))?;

        task.title = draft.title.clone();
        task.description = draft.description.clone();
        task.due_date = draft.due_date;
        if let Some(priority) = draft.priority {
            task.priority = priority;
        }
        task.assigned_to = draft.assigned().to_vec();

        for (subtask, entry) in task.subtasks.iter_mut().zip(draft.subtasks()) {
            subtask.status = SubtaskStatus::from_checked(entry.checked);
        }

        self.persist_tasks()?;
        info!("event=save_changes index={}", index);
        Ok(())
    }

    /// Write the tasks document and read it back
    fn persist_tasks(&mut self) -> Result<()> {
        collections::save(&self.store, TASKS_KEY, &self.board.tasks)?;
        self.board.tasks = collections::load_or_empty(&self.store, TASKS_KEY)?;
        Ok(())
    }
}
