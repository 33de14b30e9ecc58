//! Add task use cases: create tasks and manage categories

use crate::domain::{find_contact, seed_contacts, Category, Contact, Task, TaskDraft, TaskStatus};
use crate::error::{BoardError, Result};
use crate::infrastructure::collections::{self, CATEGORIES_KEY, CONTACTS_KEY, TASKS_KEY};
use crate::infrastructure::KeyValueStore;
use log::info;

/// Contacts stored under the contacts key, or the built-in ones when the
/// store has none.
pub fn address_book<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<Contact>> {
    let contacts: Vec<Contact> = collections::load_or_empty(store, CONTACTS_KEY)?;
    if contacts.is_empty() {
        return Ok(seed_contacts());
    }
    Ok(contacts)
}

/// Service backing the add-task form
pub struct AddTaskService<S> {
    store: S,
    tasks: Vec<Task>,
    categories: Vec<Category>,
    contacts: Vec<Contact>,
}

impl<S: KeyValueStore> AddTaskService<S> {
    /// Load tasks, categories and the address book
    pub fn open(store: S) -> Result<Self> {
        let tasks = collections::load_or_empty(&store, TASKS_KEY)?;
        let categories = collections::load_or_empty(&store, CATEGORIES_KEY)?;
        let contacts = address_book(&store)?;

        Ok(AddTaskService {
            store,
            tasks,
            categories,
            contacts,
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts that can still be picked for `draft`
    pub fn available_contacts(&self, draft: &TaskDraft) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| !draft.assigned().contains(c))
            .collect()
    }

    /// Find a contact of the address book by name
    pub fn resolve_contact(&self, name: &str) -> Result<Contact> {
        find_contact(&self.contacts, name)
            .cloned()
            .ok_or_else(|| BoardError::UnknownContact(name.to_string()))
    }

    /// Stored spelling of a category picked by name
    pub fn resolve_category(&self, name: &str) -> Result<String> {
        let wanted = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
            .map(|c| c.name.clone())
            .ok_or_else(|| BoardError::InvalidValue(format!("Unknown category: '{}'", name)))
    }

    /// Validate the form, append the task and write the tasks document.
    ///
    /// Returns the index of the new task.
    pub fn create_task(&mut self, mut draft: TaskDraft, status: TaskStatus) -> Result<usize> {
        let picked = draft.category.clone().filter(|c| !c.trim().is_empty());
        if let Some(category) = picked {
            let stored = self.resolve_category(&category)?;
            draft.set_category(&stored);
        }

        let task = draft.into_task(status).map_err(BoardError::MissingFields)?;
        self.tasks.push(task);
        collections::save(&self.store, TASKS_KEY, &self.tasks)?;

        let index = self.tasks.len() - 1;
        info!(
            "event=create_task index={} status={} title={:?}",
            index, status, self.tasks[index].title
        );
        Ok(index)
    }

    /// Append a category and write the categories document.
    ///
    /// The name is capitalized. Nothing is written when the name or the
    /// color is missing.
    pub fn add_category(&mut self, name: &str, color: &str) -> Result<&Category> {
        let mut missing = Vec::new();
        if name.trim().is_empty() {
            missing.push("category name");
        }
        if color.trim().is_empty() {
            missing.push("category color");
        }
        if !missing.is_empty() {
            return Err(BoardError::MissingFields(missing));
        }

        let category = Category::new(name, color).map_err(BoardError::InvalidValue)?;
        self.categories.push(category);
        collections::save(&self.store, CATEGORIES_KEY, &self.categories)?;

        let added = &self.categories[self.categories.len() - 1];
        info!(
            "event=add_category name={:?} color={}",
            added.name, added.color
        );
        Ok(added)
    }

    /// Remove the category at `index` and write the categories document
    pub fn remove_category(&mut self, index: usize) -> Result<Category> {
        if index >= self.categories.len() {
            return Err(BoardError::CategoryNotFound(index));
        }
        let removed = self.categories.remove(index);
        collections::save(&self.store, CATEGORIES_KEY, &self.categories)?;

        info!("event=remove_category index={} name={:?}", index, removed.name);
        Ok(removed)
    }
}
