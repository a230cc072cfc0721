//! Filtered and sorted view over the task store.
//!
//! `view` never mutates its input. Each entry keeps the task's store index so
//! the caller can address the underlying record.

use std::cmp::Ordering;

use crate::fields::SortKey;
use crate::task::Task;

/// Which tasks are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub show_completed: bool,
    pub show_incomplete: bool,
    pub search_text: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec { show_completed: true, show_incomplete: true, search_text: String::new() }
    }
}

impl FilterSpec {
    pub fn includes(&self, task: &Task) -> bool {
        let by_state = (self.show_completed && task.completed) || (self.show_incomplete && !task.completed);
        by_state && task.matches_text(&self.search_text)
    }
}

/// Display order. Descending is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub ascending: bool,
}

impl SortSpec {
    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ord = match self.key {
            SortKey::None => Ordering::Equal,
            SortKey::Priority => a.priority.cmp(&b.priority),
            SortKey::DueDate => a.due_date.cmp(&b.due_date),
            SortKey::CreatedDate => a.created_at().cmp(&b.created_at()),
        };
        if self.ascending { ord } else { ord.reverse() }
    }
}

/// One visible task and its position in the store.
#[derive(Debug, Clone, Copy)]
pub struct ViewItem<'a> {
    pub index: usize,
    pub task: &'a Task,
}

/// Filter `tasks` by `filter`, then stable-sort by `sort`.
///
/// Ties keep their store order in both directions.
pub fn view<'a>(tasks: &'a [Task], filter: &FilterSpec, sort: &SortSpec) -> Vec<ViewItem<'a>> {
    let mut items: Vec<ViewItem<'a>> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| filter.includes(t))
        .map(|(index, task)| ViewItem { index, task })
        .collect();
    if sort.key != SortKey::None {
        items.sort_by(|a, b| sort.compare(a.task, b.task));
    }
    items
}

/// Owned variant of [`view`]: clones the visible tasks in display order.
pub fn view_tasks(tasks: &[Task], filter: &FilterSpec, sort: &SortSpec) -> Vec<Task> {
    view(tasks, filter, sort).into_iter().map(|item| item.task.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use crate::task::TaskDefaults;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn task(name: &str, priority: Priority, completed: bool, due: (i32, u32, u32)) -> Task {
        let mut t = Task::new(TaskDefaults::new(name, &[], now()));
        t.priority = priority;
        t.completed = completed;
        t.due_date = NaiveDate::from_ymd_opt(due.0, due.1, due.2).unwrap();
        t
    }

    fn sample() -> Vec<Task> {
        vec![
            task("A", Priority::High, false, (2024, 1, 10)),
            task("B", Priority::Low, true, (2024, 1, 5)),
        ]
    }

    fn names(items: &[ViewItem]) -> Vec<String> {
        items.iter().map(|i| i.task.name.clone()).collect()
    }

    #[test]
    fn incomplete_only_filter() {
        let tasks = sample();
        let filter = FilterSpec { show_completed: false, ..Default::default() };
        let got = view(&tasks, &filter, &SortSpec::default());
        assert_eq!(names(&got), vec!["A"]);
        assert_eq!(got[0].index, 0);
    }

    #[test]
    fn hiding_both_states_yields_nothing() {
        let tasks = sample();
        let filter = FilterSpec { show_completed: false, show_incomplete: false, search_text: String::new() };
        assert!(view(&tasks, &filter, &SortSpec::default()).is_empty());
    }

    #[test]
    fn priority_sort_both_directions() {
        let tasks = sample();
        let desc = SortSpec { key: SortKey::Priority, ascending: false };
        assert_eq!(names(&view(&tasks, &FilterSpec::default(), &desc)), vec!["A", "B"]);
        let asc = SortSpec { key: SortKey::Priority, ascending: true };
        assert_eq!(names(&view(&tasks, &FilterSpec::default(), &asc)), vec!["B", "A"]);
    }

    #[test]
    fn due_date_sort() {
        let tasks = sample();
        let asc = SortSpec { key: SortKey::DueDate, ascending: true };
        assert_eq!(names(&view(&tasks, &FilterSpec::default(), &asc)), vec!["B", "A"]);
    }

    #[test]
    fn created_date_sort() {
        let mut older = Task::new(TaskDefaults::new("old", &[], now()));
        older.priority = Priority::Medium;
        let newer = Task::new(TaskDefaults::new("new", &[], now() + Duration::days(1)));
        let tasks = vec![older, newer];
        let desc = SortSpec { key: SortKey::CreatedDate, ascending: false };
        assert_eq!(names(&view(&tasks, &FilterSpec::default(), &desc)), vec!["new", "old"]);
    }

    #[test]
    fn equal_keys_keep_store_order_in_both_directions() {
        let tasks = vec![
            task("m1", Priority::Medium, false, (2024, 1, 1)),
            task("h1", Priority::High, false, (2024, 1, 1)),
            task("m2", Priority::Medium, false, (2024, 1, 1)),
            task("h2", Priority::High, false, (2024, 1, 1)),
            task("m3", Priority::Medium, false, (2024, 1, 1)),
        ];
        let desc = SortSpec { key: SortKey::Priority, ascending: false };
        assert_eq!(names(&view(&tasks, &FilterSpec::default(), &desc)), vec!["h1", "h2", "m1", "m2", "m3"]);
        let asc = SortSpec { key: SortKey::Priority, ascending: true };
        assert_eq!(names(&view(&tasks, &FilterSpec::default(), &asc)), vec!["m1", "m2", "m3", "h1", "h2"]);
    }

    #[test]
    fn search_is_case_sensitive_over_name_description_category() {
        let mut tasks = sample();
        tasks[0].description = "call the bank".into();
        tasks[1].category = "Banking".into();
        let filter = FilterSpec { search_text: "bank".into(), ..Default::default() };
        assert_eq!(names(&view(&tasks, &filter, &SortSpec::default())), vec!["A"]);
        let filter = FilterSpec { search_text: "Bank".into(), ..Default::default() };
        assert_eq!(names(&view(&tasks, &filter, &SortSpec::default())), vec!["B"]);
    }

    #[test]
    fn view_is_idempotent() {
        let mut tasks = sample();
        tasks.push(task("C", Priority::Medium, false, (2024, 1, 7)));
        tasks.push(task("D", Priority::High, true, (2024, 1, 2)));
        let filter = FilterSpec { show_completed: true, show_incomplete: true, search_text: String::new() };
        for key in [SortKey::None, SortKey::Priority, SortKey::DueDate, SortKey::CreatedDate] {
            for ascending in [true, false] {
                let sort = SortSpec { key, ascending };
                let once = view_tasks(&tasks, &filter, &sort);
                let twice = view_tasks(&once, &filter, &sort);
                assert_eq!(once, twice, "{key:?} ascending={ascending}");
            }
        }
    }

    #[test]
    fn view_does_not_touch_store() {
        let tasks = sample();
        let before = tasks.clone();
        let sort = SortSpec { key: SortKey::DueDate, ascending: true };
        let _ = view(&tasks, &FilterSpec::default(), &sort);
        assert_eq!(tasks, before);
    }
}
