//! Localized labels for the two display languages.
//!
//! Text is looked up by `(Language, key)`. A key that is absent from the table
//! yields [`Lookup::Missing`] instead of silently echoing the key, so callers and
//! tests can tell a real label from a fallback.

use tracing::warn;

use crate::fields::{Language, Priority, SortKey, Workload};

/// `(key, chinese, english)`
const TABLE: &[(&str, &str, &str)] = &[
    ("TodoList", "待办事项列表", "Todo List"),
    ("NewTask", "新任务", "New Task"),
    ("TaskName", "任务名称", "Task Name"),
    ("Description", "描述", "Description"),
    ("DueDate", "截止日期 (YYYY-MM-DD)", "Due Date (YYYY-MM-DD)"),
    ("Category", "分类", "Category"),
    ("Priority", "优先级", "Priority"),
    ("Workload", "工作量", "Workload"),
    ("Completed", "已完成", "Completed"),
    ("Created", "创建于", "Created"),
    ("Modified", "修改于", "Modified"),
    ("DeleteTask", "删除任务", "Delete Task"),
    ("ConfirmDeleteTask", "确定要删除这个任务吗？", "Are you sure you want to delete this task?"),
    ("Yes", "是", "Yes"),
    ("No", "否", "No"),
    ("TaskList", "任务列表", "Task List"),
    ("Work", "工作", "Work"),
    ("Personal", "个人", "Personal"),
    ("Study", "学习", "Study"),
    ("GameDev", "游戏开发", "Game Development"),
    ("AddNewCategory", "添加新分类:", "Add New Category:"),
    ("Add", "添加", "Add"),
    ("CategoryExists", "分类已存在", "Category Exists"),
    ("CategoryExistsMsg", "该分类名称已经存在!", "This category name already exists!"),
    ("CurrentCategories", "当前分类:", "Current Categories:"),
    ("DeleteCategory", "删除分类", "Delete Category"),
    ("ConfirmDeleteCategory", "确定要删除分类 '{0}' 吗?", "Are you sure you want to delete category '{0}'?"),
    ("Search", "搜索...", "Search..."),
    ("Show", "显示:", "Show:"),
    ("ShowCompleted", "已完成", "Completed"),
    ("ShowIncomplete", "未完成", "Incomplete"),
    ("Sort", "排序:", "Sort:"),
    ("Ascending", "升序", "Ascending"),
    ("Statistics", "统计", "Statistics"),
    ("Export", "导出", "Export"),
    ("TaskStatistics", "任务统计", "Task Statistics"),
    ("TotalTasks", "总任务数", "Total Tasks"),
    ("CompletedTasks", "已完成", "Completed"),
    ("IncompleteTasks", "未完成", "Incomplete"),
    ("HighPriority", "高优先级", "High Priority"),
    ("Overdue", "已逾期", "Overdue"),
    ("CompletionProgress", "完成进度", "Completion Progress"),
    ("ExportOptions", "导出选项", "Export Options"),
    ("ExportSuccess", "导出成功", "Export Success"),
    ("ExportSuccessMsg", "任务已成功导出为 {0} 格式", "Tasks exported successfully to {0} format"),
    ("ExportError", "导出错误", "Export Error"),
    ("ExportErrorMsg", "导出失败: {0}", "Export failed: {0}"),
    ("NoTasksFound", "没有找到匹配的任务", "No matching tasks found"),
    ("Total", "总数", "Total"),
    ("Showing", "显示", "Showing"),
    ("AddNewTask", "添加新任务", "Add New Task"),
    ("Language", "语言", "Language"),
    ("Chinese", "中文", "中文"),
    ("English", "英文", "English"),
];

const PRIORITY_LABELS: [[&str; 3]; 2] = [["低", "中", "高"], ["Low", "Medium", "High"]];
const WORKLOAD_LABELS: [[&str; 3]; 2] = [["小", "中", "大"], ["Small", "Medium", "Large"]];
const SORT_LABELS: [[&str; 4]; 2] = [
    ["默认", "优先级", "截止日期", "创建日期"],
    ["Default", "Priority", "Due Date", "Created Date"],
];

/// Result of a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'k> {
    Found(&'static str),
    Missing(&'k str),
}

impl<'k> Lookup<'k> {
    /// The localized text, or the key itself when missing.
    pub fn or_key(self) -> &'k str {
        match self {
            Lookup::Found(s) => s,
            Lookup::Missing(k) => k,
        }
    }
}

fn column(lang: Language) -> usize {
    match lang {
        Language::Chinese => 0,
        Language::English => 1,
    }
}

/// Look up `key` in `lang`.
pub fn lookup(lang: Language, key: &str) -> Lookup<'_> {
    match TABLE.iter().find(|(k, _, _)| *k == key) {
        Some(&(_, zh, en)) => Lookup::Found(if column(lang) == 0 { zh } else { en }),
        None => {
            warn!(key, "no translation for key");
            Lookup::Missing(key)
        }
    }
}

/// Localized text for `key`, falling back to the key itself.
pub fn text(lang: Language, key: &str) -> &str {
    lookup(lang, key).or_key()
}

/// Localized text with positional `{0}`, `{1}`, ... placeholders replaced by `args`.
pub fn format_text(lang: Language, key: &str, args: &[&str]) -> String {
    match lookup(lang, key) {
        Lookup::Found(template) => args
            .iter()
            .enumerate()
            .fold(template.to_string(), |acc, (i, arg)| acc.replace(&format!("{{{i}}}"), arg)),
        Lookup::Missing(k) => k.to_string(),
    }
}

pub fn priority_label(lang: Language, p: Priority) -> &'static str {
    PRIORITY_LABELS[column(lang)][p.index()]
}

pub fn workload_label(lang: Language, w: Workload) -> &'static str {
    WORKLOAD_LABELS[column(lang)][w.index()]
}

pub fn sort_label(lang: Language, key: SortKey) -> &'static str {
    SORT_LABELS[column(lang)][key.index()]
}

/// Localized "Completed" / "Incomplete" status label.
pub fn completion_label(lang: Language, completed: bool) -> &'static str {
    let key = if completed { "Completed" } else { "IncompleteTasks" };
    match lookup(lang, key) {
        Lookup::Found(s) => s,
        Lookup::Missing(_) => key,
    }
}

/// Category names seeded into a new store, localized at creation time.
pub fn default_categories(lang: Language) -> Vec<String> {
    ["Work", "Personal", "Study", "GameDev"]
        .iter()
        .map(|k| text(lang, k).to_string())
        .collect()
}
