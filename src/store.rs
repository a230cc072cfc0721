//! In-memory task store for one session.
//!
//! The store keeps tasks in user-defined order and an insertion-ordered list of
//! category labels. All index arguments are store positions; callers validate
//! them (or handle [`StoreError::IndexOutOfRange`]) before mutating.

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::debug;

use crate::task::{parse_due_input, Task, TaskDefaults, TaskEdit};

/// Precondition failures raised by store mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("category '{0}' already exists")]
    DuplicateCategory(String),
    #[error("category name must not be empty")]
    EmptyCategory,
}

/// Ordered tasks plus category labels.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Vec<String>,
}

fn check(index: usize, len: usize) -> Result<(), StoreError> {
    if index < len {
        Ok(())
    } else {
        Err(StoreError::IndexOutOfRange { index, len })
    }
}

impl TaskStore {
    /// Empty store with the given initial categories (duplicates and empty names are dropped).
    pub fn with_categories(categories: impl IntoIterator<Item = String>) -> Self {
        let mut store = TaskStore::default();
        for c in categories {
            let _ = store.add_category(&c);
        }
        store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, index: usize) -> Result<&Task, StoreError> {
        check(index, self.tasks.len())?;
        Ok(&self.tasks[index])
    }

    /// Append a new task built from `defaults`.
    pub fn add_task(&mut self, defaults: TaskDefaults) -> &Task {
        self.tasks.push(Task::new(defaults));
        debug!(index = self.tasks.len() - 1, "task added");
        &self.tasks[self.tasks.len() - 1]
    }

    /// Remove the task at `index`, shifting later tasks left.
    pub fn remove_task(&mut self, index: usize) -> Result<Task, StoreError> {
        check(index, self.tasks.len())?;
        let removed = self.tasks.remove(index);
        debug!(index, name = %removed.name, "task removed");
        Ok(removed)
    }

    /// Move the task at `from` to position `to`; every other task keeps its relative order.
    pub fn reorder_task(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        let len = self.tasks.len();
        check(from, len)?;
        check(to, len)?;
        if from == to {
            return Ok(());
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        debug!(from, to, "task moved");
        Ok(())
    }

    /// Apply `edit` to the task at `index`, stamping its modification time.
    pub fn edit_task(&mut self, index: usize, edit: &TaskEdit, now: NaiveDateTime) -> Result<&Task, StoreError> {
        check(index, self.tasks.len())?;
        if self.tasks[index].apply(edit, now) {
            debug!(index, "task edited");
        }
        Ok(&self.tasks[index])
    }

    /// Set the due date from free text. Unparseable input leaves the task
    /// untouched and is not reported; returns whether the date was applied.
    pub fn set_due_from_input(&mut self, index: usize, input: &str, now: NaiveDateTime) -> Result<bool, StoreError> {
        check(index, self.tasks.len())?;
        match parse_due_input(input) {
            Some(due) => {
                let edit = TaskEdit { due_date: Some(due), ..Default::default() };
                self.tasks[index].apply(&edit, now);
                Ok(true)
            }
            None => {
                debug!(index, input, "unparseable due date discarded");
                Ok(false)
            }
        }
    }

    /// Append a category label. Names are compared case-sensitively.
    pub fn add_category(&mut self, name: &str) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyCategory);
        }
        if self.categories.iter().any(|c| c == name) {
            return Err(StoreError::DuplicateCategory(name.to_string()));
        }
        self.categories.push(name.to_string());
        debug!(category = name, "category added");
        Ok(())
    }

    /// Remove the category at `index`. Tasks filed under it keep the label.
    pub fn remove_category(&mut self, index: usize) -> Result<String, StoreError> {
        check(index, self.categories.len())?;
        let removed = self.categories.remove(index);
        debug!(category = %removed, "category removed");
        Ok(removed)
    }
}
