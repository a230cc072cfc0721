//! Task data structure and related functionality.
//!
//! This module defines the `Task` record with its scheduling, classification and
//! completion metadata, the defaults used when a new task is appended, and the
//! set of field changes an edit may carry.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::fields::*;

/// Days between creation and the default due date of a new task.
pub const DEFAULT_DUE_DAYS: i64 = 7;

/// A single todo item.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub workload: Workload,
    pub completed: bool,
    pub category: String,
    created_at: NaiveDateTime,
    pub modified_at: NaiveDateTime,
}

impl Task {
    /// Build a task from `defaults`; both timestamps are set to `defaults.now`.
    pub fn new(defaults: TaskDefaults) -> Self {
        Task {
            name: defaults.name,
            description: String::new(),
            due_date: defaults.due_date,
            priority: defaults.priority,
            workload: defaults.workload,
            completed: false,
            category: defaults.category,
            created_at: defaults.now,
            modified_at: defaults.now,
        }
    }

    /// Creation timestamp. There is no setter.
    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Apply every field present in `edit`. Returns true if anything was set.
    pub fn apply(&mut self, edit: &TaskEdit, now: NaiveDateTime) -> bool {
        if edit.is_empty() {
            return false;
        }
        if let Some(name) = &edit.name {
            self.name = name.clone();
        }
        if let Some(desc) = &edit.description {
            self.description = desc.clone();
        }
        if let Some(due) = edit.due_date {
            self.due_date = due;
        }
        if let Some(category) = &edit.category {
            self.category = category.clone();
        }
        if let Some(p) = edit.priority {
            self.priority = p;
        }
        if let Some(w) = edit.workload {
            self.workload = w;
        }
        if let Some(c) = edit.completed {
            self.completed = c;
        }
        self.modified_at = now;
        true
    }

    /// True if `needle` occurs (case-sensitively) in the name, description or category.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.contains(needle)
            || self.description.contains(needle)
            || self.category.contains(needle)
    }
}

/// Initial values for a task appended to the store.
#[derive(Debug, Clone)]
pub struct TaskDefaults {
    pub name: String,
    pub due_date: NaiveDate,
    pub category: String,
    pub priority: Priority,
    pub workload: Workload,
    pub now: NaiveDateTime,
}

impl TaskDefaults {
    /// Defaults for "add new task": due a week after `now`, filed under the
    /// first category if there is one.
    pub fn new(name: impl Into<String>, categories: &[String], now: NaiveDateTime) -> Self {
        TaskDefaults {
            name: name.into(),
            due_date: now.date() + Duration::days(DEFAULT_DUE_DAYS),
            category: categories.first().cloned().unwrap_or_default(),
            priority: Priority::default(),
            workload: Workload::default(),
            now,
        }
    }
}

/// Field changes for one edit. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskEdit {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub workload: Option<Workload>,
    pub completed: Option<bool>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        *self == TaskEdit::default()
    }
}

/// Best-effort due date parsing: `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD`,
/// or a timestamp `YYYY-MM-DD HH:MM[:SS]` / `YYYY-MM-DDTHH:MM:SS` (time discarded).
pub fn parse_due_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}
