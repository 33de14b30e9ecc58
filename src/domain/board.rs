//! Board view model: tasks grouped into status columns

use crate::domain::{color_for_category, Category, Task, TaskStatus};

/// A task placed on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<'a> {
    /// Position of the task in the tasks document
    pub index: usize,
    /// `{status}{n}` where `n` counts cards within the column
    pub card_id: String,
    pub task: &'a Task,
    pub label_color: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column<'a> {
    pub status: TaskStatus,
    pub cards: Vec<Card<'a>>,
}

impl Column<'_> {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Snapshot of both documents the board is rendered from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
}

impl Board {
    pub fn new(tasks: Vec<Task>, categories: Vec<Category>) -> Self {
        Board { tasks, categories }
    }

    /// Cards for one status, in document order.
    pub fn column(&self, status: TaskStatus) -> Column<'_> {
        self.filtered_column(status, |_| true)
    }

    /// All four columns in board order.
    pub fn columns(&self) -> Vec<Column<'_>> {
        TaskStatus::ALL.iter().map(|&s| self.column(s)).collect()
    }

    /// Columns keeping only cards whose title or description match `query`.
    ///
    /// Card ids are assigned before filtering so they stay stable while
    /// searching.
    pub fn search(&self, query: &str) -> Vec<Column<'_>> {
        TaskStatus::ALL
            .iter()
            .map(|&s| self.filtered_column(s, |task| task.matches(query)))
            .collect()
    }

    pub fn label_color(&self, index: usize) -> Option<&str> {
        let task = self.tasks.get(index)?;
        color_for_category(&self.categories, &task.category)
    }

    fn filtered_column(&self, status: TaskStatus, keep: impl Fn(&Task) -> bool) -> Column<'_> {
        let cards = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.status == status)
            .enumerate()
            .filter(|(_, (_, task))| keep(task))
            .map(|(n, (index, task))| Card {
                index,
                card_id: format!("{}{}", status.as_str(), n),
                task,
                label_color: color_for_category(&self.categories, &task.category),
            })
            .collect();

        Column { status, cards }
    }
}
