//! Summary counts over the task list.

use chrono::NaiveDate;
use serde::Serialize;

use crate::fields::{Language, Priority};
use crate::i18n::text;
use crate::task::Task;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub incomplete: usize,
    pub high_priority: usize,
    /// Incomplete tasks due before `today`.
    pub overdue: usize,
    /// `completed / total`, 0.0 for an empty list.
    pub completion_rate: f64,
}

impl Statistics {
    pub fn collect(tasks: &[Task], today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let high_priority = tasks.iter().filter(|t| t.priority == Priority::High).count();
        let overdue = tasks.iter().filter(|t| !t.completed && t.due_date < today).count();
        let completion_rate = if total > 0 { completed as f64 / total as f64 } else { 0.0 };
        Statistics { total, completed, incomplete: total - completed, high_priority, overdue, completion_rate }
    }

    /// Completion rate as a whole percentage.
    pub fn percent(&self) -> u32 {
        (self.completion_rate * 100.0).round() as u32
    }

    /// Localized report, one line per figure plus a progress line.
    pub fn render(&self, lang: Language) -> String {
        let pct = self.percent();
        [
            text(lang, "TaskStatistics").to_string(),
            format!("{}: {}", text(lang, "TotalTasks"), self.total),
            format!("{}: {} ({}%)", text(lang, "CompletedTasks"), self.completed, pct),
            format!("{}: {}", text(lang, "IncompleteTasks"), self.incomplete),
            format!("{}: {}", text(lang, "HighPriority"), self.high_priority),
            format!("{}: {}", text(lang, "Overdue"), self.overdue),
            format!("{}: {}/{} ({}%)", text(lang, "CompletionProgress"), self.completed, self.total, pct),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDefaults;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn task(priority: Priority, completed: bool, due: u32) -> Task {
        let mut t = Task::new(TaskDefaults::new("t", &[], day(1).and_hms_opt(0, 0, 0).unwrap()));
        t.priority = priority;
        t.completed = completed;
        t.due_date = day(due);
        t
    }

    #[test]
    fn empty_list() {
        let stats = Statistics::collect(&[], day(10));
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert_eq!(stats.percent(), 0);
    }

    #[test]
    fn counts() {
        let tasks = vec![
            task(Priority::High, false, 5),
            task(Priority::High, true, 5),
            task(Priority::Low, false, 10),
            task(Priority::Medium, false, 20),
        ];
        let stats = Statistics::collect(&tasks, day(10));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.incomplete, 3);
        assert_eq!(stats.high_priority, 2);
        // Completed and due-today tasks are not overdue.
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.percent(), 25);
    }

    #[test]
    fn render_english() {
        let tasks = vec![task(Priority::High, true, 1), task(Priority::Low, false, 1), task(Priority::Low, false, 30)];
        let out = Statistics::collect(&tasks, day(10)).render(Language::English);
        assert_eq!(
            out,
            "Task Statistics\nTotal Tasks: 3\nCompleted: 1 (33%)\nIncomplete: 2\nHigh Priority: 1\nOverdue: 1\nCompletion Progress: 1/3 (33%)"
        );
    }

    #[test]
    fn serializes_to_json() {
        let stats = Statistics::collect(&[task(Priority::High, true, 1)], day(10));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["completion_rate"], 1.0);
    }
}
