//! Session command definitions and their handlers.
//!
//! Every line of a session is parsed into a [`SessionCommand`] and handed to
//! [`dispatch`]. Handlers print through the session console and return
//! [`SessionError`] for failures the session reports without ending.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing::{info, warn};

use crate::export::{default_file_name, export_to_file};
use crate::fields::*;
use crate::i18n::{format_text, priority_label, sort_label, text, workload_label};
use crate::session::{Console, Session, SessionError};
use crate::stats::Statistics;
use crate::store::StoreError;
use crate::task::{Task, TaskDefaults, TaskEdit};
use crate::view::{view, view_tasks};

/// One session input line.
#[derive(Parser, Debug)]
#[command(name = "todo", no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Append a new task (due in a week, filed under the first category).
    Add {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        /// Due date, YYYY-MM-DD. Unparseable dates are ignored.
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        #[arg(long, value_enum)]
        workload: Option<Workload>,
    },

    /// Change fields of a task.
    Edit {
        /// Task index, as shown by `list`.
        index: usize,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        /// Due date, YYYY-MM-DD. Unparseable dates are ignored.
        #[arg(long)]
        due: Option<String>,
        /// Category label, or "" for none.
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        #[arg(long, value_enum)]
        workload: Option<Workload>,
        /// Mark completed.
        #[arg(long, conflicts_with = "undone")]
        done: bool,
        /// Mark incomplete.
        #[arg(long)]
        undone: bool,
    },

    /// Mark a task completed.
    Done { index: usize },

    /// Mark a task incomplete.
    Undone { index: usize },

    /// Delete a task (asks for confirmation).
    #[command(alias = "delete")]
    Rm { index: usize },

    /// Move a task to another position.
    Mv { from: usize, to: usize },

    /// Show every field of a task.
    Show { index: usize },

    /// List visible tasks with the current filter and sort.
    #[command(alias = "ls")]
    List,

    /// Change which tasks are visible.
    Filter {
        #[arg(long, value_enum)]
        completed: Option<Toggle>,
        #[arg(long, value_enum)]
        incomplete: Option<Toggle>,
        /// Case-sensitive text to look for in name, description and category.
        #[arg(long, conflicts_with = "clear_search")]
        search: Option<String>,
        #[arg(long)]
        clear_search: bool,
    },

    /// Change the display order.
    Sort {
        #[arg(value_enum)]
        key: SortKey,
        #[arg(long, conflicts_with = "desc")]
        asc: bool,
        #[arg(long)]
        desc: bool,
    },

    /// Add a category.
    CatAdd { name: String },

    /// Remove a category (asks for confirmation). Tasks keep the label.
    CatRm { index: usize },

    /// List categories.
    Cats,

    /// Show task statistics.
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Write tasks to a file.
    Export {
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output path (default: tasks.<format>).
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Export only the visible tasks, in display order.
        #[arg(long)]
        visible: bool,
    },

    /// Set the display language, or toggle it when none is given.
    Lang {
        #[arg(value_enum)]
        lang: Option<Language>,
    },

    /// End the session.
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session keeps reading after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn dispatch(session: &mut Session, console: &mut Console, command: SessionCommand) -> Result<Flow, SessionError> {
    match command {
        SessionCommand::Add { name, desc, due, category, priority, workload } => {
            cmd_add(session, console, name, desc, due, category, priority, workload)?
        }
        SessionCommand::Edit { index, name, desc, due, category, priority, workload, done, undone } => {
            let completed = if done { Some(true) } else if undone { Some(false) } else { None };
            let edit = TaskEdit { name, description: desc, due_date: None, category, priority, workload, completed };
            cmd_edit(session, console, index, edit, due)?
        }
        SessionCommand::Done { index } => {
            cmd_edit(session, console, index, TaskEdit { completed: Some(true), ..Default::default() }, None)?
        }
        SessionCommand::Undone { index } => {
            cmd_edit(session, console, index, TaskEdit { completed: Some(false), ..Default::default() }, None)?
        }
        SessionCommand::Rm { index } => cmd_rm(session, console, index)?,
        SessionCommand::Mv { from, to } => cmd_mv(session, console, from, to)?,
        SessionCommand::Show { index } => cmd_show(session, console, index)?,
        SessionCommand::List => cmd_list(session, console)?,
        SessionCommand::Filter { completed, incomplete, search, clear_search } => {
            cmd_filter(session, console, completed, incomplete, search, clear_search)?
        }
        SessionCommand::Sort { key, asc, desc } => cmd_sort(session, console, key, asc, desc)?,
        SessionCommand::CatAdd { name } => cmd_cat_add(session, console, &name)?,
        SessionCommand::CatRm { index } => cmd_cat_rm(session, console, index)?,
        SessionCommand::Cats => cmd_cats(session, console)?,
        SessionCommand::Stats { json } => cmd_stats(session, console, json)?,
        SessionCommand::Export { format, output, visible } => cmd_export(session, console, format, output, visible)?,
        SessionCommand::Lang { lang } => cmd_lang(session, console, lang)?,
        SessionCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Reject labels that are neither empty nor a known category.
fn check_category(session: &Session, category: Option<&str>) -> Result<(), SessionError> {
    match category {
        Some(c) if !c.is_empty() && !session.store.categories().iter().any(|k| k == c) => {
            Err(SessionError::UnknownCategory(c.to_string()))
        }
        _ => Ok(()),
    }
}

/// Due date label without the format hint.
fn due_header(lang: Language) -> &'static str {
    let label = text(lang, "DueDate");
    label.split(" (").next().unwrap_or(label)
}

/// Truncate a string to `width` characters, appending an ellipsis when cut.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn summary_line(lang: Language, index: usize, task: &Task) -> String {
    format!(
        "{:<4} {:<3} {:<8} {:<8} {:<10} {:<16} {}",
        index,
        if task.completed { "[x]" } else { "[ ]" },
        priority_label(lang, task.priority),
        workload_label(lang, task.workload),
        task.due_date.format("%Y-%m-%d"),
        truncate(&task.category, 16),
        task.name,
    )
}

/// Append a new task.
#[allow(clippy::too_many_arguments)]
pub fn cmd_add(
    session: &mut Session,
    console: &mut Console,
    name: Option<String>,
    desc: Option<String>,
    due: Option<String>,
    category: Option<String>,
    priority: Option<Priority>,
    workload: Option<Workload>,
) -> Result<(), SessionError> {
    check_category(session, category.as_deref())?;
    let now = session.now();
    let name = name.unwrap_or_else(|| session.t("NewTask").to_string());
    let mut defaults = TaskDefaults::new(name, session.store.categories(), now);
    if let Some(c) = category {
        defaults.category = c;
    }
    defaults.priority = priority.unwrap_or_default();
    defaults.workload = workload.unwrap_or_default();
    session.store.add_task(defaults);
    let index = session.store.len() - 1;
    if let Some(desc) = desc {
        session.store.edit_task(index, &TaskEdit { description: Some(desc), ..Default::default() }, now)?;
    }
    if let Some(due) = due {
        session.store.set_due_from_input(index, &due, now)?;
    }
    let task = session.store.task(index)?;
    writeln!(console.out, "{}: {}", session.t("AddNewTask"), summary_line(session.lang, index, task))?;
    Ok(())
}

/// Apply field changes to one task. A due date that does not parse is dropped silently.
pub fn cmd_edit(
    session: &mut Session,
    console: &mut Console,
    index: usize,
    edit: TaskEdit,
    due: Option<String>,
) -> Result<(), SessionError> {
    session.store.task(index)?;
    check_category(session, edit.category.as_deref())?;
    let now = session.now();
    session.store.edit_task(index, &edit, now)?;
    if let Some(due) = due {
        session.store.set_due_from_input(index, &due, now)?;
    }
    let task = session.store.task(index)?;
    writeln!(console.out, "{}", summary_line(session.lang, index, task))?;
    Ok(())
}

/// Delete a task after confirmation.
pub fn cmd_rm(session: &mut Session, console: &mut Console, index: usize) -> Result<(), SessionError> {
    let name = session.store.task(index)?.name.clone();
    let question = format!("{} '{}': {}", session.t("DeleteTask"), name, session.t("ConfirmDeleteTask"));
    if !console.confirm(&question, session.lang)? {
        writeln!(console.out, "{}", session.t("No"))?;
        return Ok(());
    }
    session.store.remove_task(index)?;
    writeln!(console.out, "{}: {}", session.t("DeleteTask"), name)?;
    Ok(())
}

pub fn cmd_mv(session: &mut Session, console: &mut Console, from: usize, to: usize) -> Result<(), SessionError> {
    session.store.reorder_task(from, to)?;
    writeln!(console.out, "{} -> {}", from, to)?;
    Ok(())
}

/// Print every field of one task.
pub fn cmd_show(session: &Session, console: &mut Console, index: usize) -> Result<(), SessionError> {
    let task = session.store.task(index)?;
    let lang = session.lang;
    let done = if task.completed { format!(" ({})", text(lang, "Completed")) } else { String::new() };
    writeln!(console.out, "#{} {}{}", index, task.name, done)?;
    writeln!(console.out, "  {}: {}", text(lang, "TaskName"), task.name)?;
    writeln!(console.out, "  {}: {}", text(lang, "Description"), task.description)?;
    writeln!(console.out, "  {}: {}", text(lang, "DueDate"), task.due_date.format("%Y-%m-%d"))?;
    writeln!(console.out, "  {}: {}", text(lang, "Category"), task.category)?;
    writeln!(console.out, "  {}: {}", text(lang, "Priority"), priority_label(lang, task.priority))?;
    writeln!(console.out, "  {}: {}", text(lang, "Workload"), workload_label(lang, task.workload))?;
    let yes_no = if task.completed { text(lang, "Yes") } else { text(lang, "No") };
    writeln!(console.out, "  {}: {}", text(lang, "Completed"), yes_no)?;
    writeln!(
        console.out,
        "  {}: {} | {}: {}",
        text(lang, "Created"),
        task.created_at().format("%Y-%m-%d"),
        text(lang, "Modified"),
        task.modified_at.format("%Y-%m-%d %H:%M"),
    )?;
    Ok(())
}

/// Print the visible tasks and a total/showing footer.
pub fn cmd_list(session: &Session, console: &mut Console) -> Result<(), SessionError> {
    let lang = session.lang;
    let items = view(session.store.tasks(), &session.filter, &session.sort);
    if items.is_empty() {
        writeln!(console.out, "{}", text(lang, "NoTasksFound"))?;
    } else {
        writeln!(
            console.out,
            "{:<4} {:<3} {:<8} {:<8} {:<10} {:<16} {}",
            "#",
            "",
            text(lang, "Priority"),
            text(lang, "Workload"),
            due_header(lang),
            text(lang, "Category"),
            text(lang, "TaskName"),
        )?;
        for item in &items {
            writeln!(console.out, "{}", summary_line(lang, item.index, item.task))?;
        }
    }
    writeln!(
        console.out,
        "{}: {} | {}: {}",
        text(lang, "Total"),
        session.store.len(),
        text(lang, "Showing"),
        items.len()
    )?;
    Ok(())
}

fn settings_line(session: &Session) -> String {
    let lang = session.lang;
    let mark = |on: bool| if on { "[x]" } else { "[ ]" };
    let direction = if session.sort.ascending { format!(" ({})", text(lang, "Ascending")) } else { String::new() };
    format!(
        "{} {} {} {} {} | {} {} | {} {}{}",
        text(lang, "Show"),
        mark(session.filter.show_completed),
        text(lang, "ShowCompleted"),
        mark(session.filter.show_incomplete),
        text(lang, "ShowIncomplete"),
        text(lang, "Search"),
        session.filter.search_text,
        text(lang, "Sort"),
        sort_label(lang, session.sort.key),
        direction,
    )
}

pub fn cmd_filter(
    session: &mut Session,
    console: &mut Console,
    completed: Option<Toggle>,
    incomplete: Option<Toggle>,
    search: Option<String>,
    clear_search: bool,
) -> Result<(), SessionError> {
    if let Some(c) = completed {
        session.filter.show_completed = c.into();
    }
    if let Some(i) = incomplete {
        session.filter.show_incomplete = i.into();
    }
    if let Some(s) = search {
        session.filter.search_text = s;
    }
    if clear_search {
        session.filter.search_text.clear();
    }
    writeln!(console.out, "{}", settings_line(session))?;
    Ok(())
}

/// Set the sort key; the direction changes only when `--asc` or `--desc` is given.
pub fn cmd_sort(session: &mut Session, console: &mut Console, key: SortKey, asc: bool, desc: bool) -> Result<(), SessionError> {
    session.sort.key = key;
    if asc {
        session.sort.ascending = true;
    } else if desc {
        session.sort.ascending = false;
    }
    writeln!(console.out, "{}", settings_line(session))?;
    Ok(())
}

/// Add a category. A duplicate name is reported with the localized message.
pub fn cmd_cat_add(session: &mut Session, console: &mut Console, name: &str) -> Result<(), SessionError> {
    match session.store.add_category(name) {
        Ok(()) => cmd_cats(session, console),
        Err(StoreError::DuplicateCategory(_)) => {
            writeln!(console.out, "{}: {}", session.t("CategoryExists"), session.t("CategoryExistsMsg"))?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Remove a category after confirmation.
pub fn cmd_cat_rm(session: &mut Session, console: &mut Console, index: usize) -> Result<(), SessionError> {
    let name = session
        .store
        .categories()
        .get(index)
        .cloned()
        .ok_or(StoreError::IndexOutOfRange { index, len: session.store.categories().len() })?;
    let question = format_text(session.lang, "ConfirmDeleteCategory", &[name.as_str()]);
    if !console.confirm(&question, session.lang)? {
        writeln!(console.out, "{}", session.t("No"))?;
        return Ok(());
    }
    session.store.remove_category(index)?;
    cmd_cats(session, console)
}

pub fn cmd_cats(session: &Session, console: &mut Console) -> Result<(), SessionError> {
    let listed: Vec<String> = session
        .store
        .categories()
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{i}:{c}"))
        .collect();
    writeln!(console.out, "{} {}", session.t("CurrentCategories"), listed.join("  "))?;
    Ok(())
}

pub fn cmd_stats(session: &Session, console: &mut Console, json: bool) -> Result<(), SessionError> {
    let stats = Statistics::collect(session.store.tasks(), session.now().date());
    if json {
        writeln!(console.out, "{}", serde_json::to_string_pretty(&stats)?)?;
    } else {
        writeln!(console.out, "{}", stats.render(session.lang))?;
    }
    Ok(())
}

/// Export all tasks in store order (or only the visible ones) and report the outcome.
pub fn cmd_export(
    session: &Session,
    console: &mut Console,
    format: ExportFormat,
    output: Option<PathBuf>,
    visible: bool,
) -> Result<(), SessionError> {
    let path = output.unwrap_or_else(|| PathBuf::from(default_file_name(format)));
    let visible_tasks;
    let tasks: &[Task] = if visible {
        visible_tasks = view_tasks(session.store.tasks(), &session.filter, &session.sort);
        &visible_tasks
    } else {
        session.store.tasks()
    };
    match export_to_file(tasks, format, session.lang, &path) {
        Ok(_) => {
            info!(path = %path.display(), "export finished");
            writeln!(
                console.out,
                "{}: {} ({})",
                session.t("ExportSuccess"),
                format_text(session.lang, "ExportSuccessMsg", &[format.name()]),
                path.display()
            )?;
        }
        Err(e) => {
            warn!(error = %e, "export failed");
            let reason = e.to_string();
            writeln!(
                console.out,
                "{}: {}",
                session.t("ExportError"),
                format_text(session.lang, "ExportErrorMsg", &[reason.as_str()])
            )?;
        }
    }
    Ok(())
}

/// Switch the display language. Existing category names are not translated.
pub fn cmd_lang(session: &mut Session, console: &mut Console, lang: Option<Language>) -> Result<(), SessionError> {
    session.lang = lang.unwrap_or_else(|| session.lang.toggled());
    let name = session.t(session.lang.key());
    writeln!(console.out, "{}: {}", session.t("Language"), name)?;
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use crate::cli::Cli;
    use clap::CommandFactory;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use crate::fields::Language;
    use crate::session::Session;
    use chrono::{NaiveDate, NaiveDateTime};

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    fn english() -> Session {
        Session::new(Language::English, false).with_clock(fixed_now)
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn names(session: &Session) -> Vec<String> {
        session.store.tasks().iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn add_uses_defaults() {
        let mut session = english();
        run(&mut session, "add\n");
        let task = session.store.task(0).unwrap();
        assert_eq!(task.name, "New Task");
        assert_eq!(task.category, "Work");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(task.created_at(), fixed_now());
    }

    #[test]
    fn add_with_fields() {
        let mut session = english();
        let out = run(
            &mut session,
            "add --name \"Write report\" --desc \"Q1 numbers\" --due 2024-02-01 --category Study --priority high --workload large\n",
        );
        let task = session.store.task(0).unwrap();
        assert_eq!(task.description, "Q1 numbers");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(task.category, "Study");
        assert_eq!(task.priority, crate::fields::Priority::High);
        assert_eq!(task.workload, crate::fields::Workload::Large);
        assert!(out.starts_with("Add New Task: 0"), "{out}");
    }

    #[test]
    fn add_rejects_unknown_category() {
        let mut session = english();
        let out = run(&mut session, "add --category Nowhere\n");
        assert!(out.contains("unknown category 'Nowhere'"));
        assert!(session.store.is_empty());
    }

    #[test]
    fn edit_ignores_bad_due_date() {
        let mut session = english();
        run(&mut session, "add --due 2024-03-01\nedit 0 --due tomorrowish --name Renamed\n");
        let task = session.store.task(0).unwrap();
        assert_eq!(task.name, "Renamed");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn done_and_undone() {
        let mut session = english();
        run(&mut session, "add\ndone 0\n");
        assert!(session.store.task(0).unwrap().completed);
        run(&mut session, "undone 0\n");
        assert!(!session.store.task(0).unwrap().completed);
        run(&mut session, "edit 0 --done\n");
        assert!(session.store.task(0).unwrap().completed);
    }

    #[test]
    fn rm_asks_for_confirmation() {
        let mut session = english();
        let out = run(&mut session, "add --name A\nadd --name B\nrm 0\nn\n");
        assert!(out.contains("Are you sure you want to delete this task? [Yes/No] No\n"), "{out}");
        assert_eq!(names(&session), vec!["A", "B"]);
        run(&mut session, "rm 0\ny\n");
        assert_eq!(names(&session), vec!["B"]);
        // End of input counts as no.
        run(&mut session, "rm 0\n");
        assert_eq!(names(&session), vec!["B"]);
    }

    #[test]
    fn rm_with_assume_yes() {
        let mut session = Session::new(Language::English, true).with_clock(fixed_now);
        run(&mut session, "add\nrm 0\n");
        assert!(session.store.is_empty());
    }

    #[test]
    fn mv_reorders() {
        let mut session = english();
        run(&mut session, "add --name A\nadd --name B\nadd --name C\nmv 0 2\n");
        assert_eq!(names(&session), vec!["B", "C", "A"]);
    }

    #[test]
    fn list_applies_filter_and_sort() {
        let mut session = english();
        let script = "add --name A --priority high --due 2024-01-10\n\
                      add --name B --priority low --due 2024-01-05\n\
                      done 1\n\
                      filter --completed off\n";
        run(&mut session, script);
        let out = run(&mut session, "list\n");
        assert!(out.contains(" A"));
        assert!(!out.lines().any(|l| l.ends_with(" B")));
        assert!(out.ends_with("Total: 2 | Showing: 1\n"), "{out}");

        let out = run(&mut session, "filter --completed on\nsort priority --asc\nlist\n");
        let rows: Vec<&str> = out.lines().filter(|l| l.starts_with("0 ") || l.starts_with("1 ")).collect();
        assert!(rows[0].ends_with(" B") && rows[1].ends_with(" A"), "{out}");
    }

    #[test]
    fn list_reports_empty_view() {
        let mut session = english();
        let out = run(&mut session, "list\n");
        assert_eq!(out, "No matching tasks found\nTotal: 0 | Showing: 0\n");
    }

    #[test]
    fn search_filter_round_trip() {
        let mut session = english();
        run(&mut session, "add --name \"Buy milk\"\nadd --name Gym\nfilter --search milk\n");
        assert_eq!(session.filter.search_text, "milk");
        let out = run(&mut session, "list\n");
        assert!(out.ends_with("Showing: 1\n"));
        run(&mut session, "filter --clear-search\n");
        assert!(session.filter.search_text.is_empty());
    }

    #[test]
    fn sort_keeps_direction_unless_given() {
        let mut session = english();
        run(&mut session, "sort due-date --asc\nsort priority\n");
        assert!(session.sort.ascending);
        assert_eq!(session.sort.key, crate::fields::SortKey::Priority);
        run(&mut session, "sort none --desc\n");
        assert!(!session.sort.ascending);
    }

    #[test]
    fn duplicate_category_uses_localized_message() {
        let mut session = english();
        let out = run(&mut session, "cat-add Errands\ncat-add Errands\n");
        assert!(out.contains("Category Exists: This category name already exists!"));
        assert_eq!(session.store.categories().iter().filter(|c| *c == "Errands").count(), 1);
    }

    #[test]
    fn cat_rm_keeps_task_labels() {
        let mut session = Session::new(Language::English, true).with_clock(fixed_now);
        run(&mut session, "add\ncat-rm 0\n");
        assert!(!session.store.categories().iter().any(|c| c == "Work"));
        assert_eq!(session.store.task(0).unwrap().category, "Work");
    }

    #[test]
    fn declined_cat_rm_answers_no() {
        let mut session = english();
        let out = run(&mut session, "cat-rm 0
n
");
        assert!(out.ends_with("Are you sure you want to delete category 'Work'? [Yes/No] No\n"), "{out}");
        assert!(session.store.categories().iter().any(|c| c == "Work"));

        let mut session = Session::new(Language::Chinese, false).with_clock(fixed_now);
        let out = run(&mut session, "cat-rm 0
");
        assert!(out.ends_with("[是/否] 否\n"), "{out}");
        assert_eq!(session.store.categories()[0], "工作");
    }

    #[test]
    fn show_prints_timestamps() {
        let mut session = english();
        let out = run(&mut session, "add --name A\nshow 0\n");
        assert!(out.contains("Created: 2024-01-01 | Modified: 2024-01-01 09:00"), "{out}");
    }

    #[test]
    fn stats_json() {
        let mut session = english();
        let out = run(&mut session, "add\nadd\ndone 0\nstats --json\n");
        let start = out.find('{').unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out[start..]).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["completed"], 1);
    }

    #[test]
    fn export_writes_file_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let mut session = english();
        let script = format!("add --name A\nadd --name B\ndone 1\nexport json -o \"{}\"\n", path.display());
        let out = run(&mut session, &script);
        assert!(out.contains("Export Success: Tasks exported successfully to JSON format"), "{out}");
        let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed[0]["status"], "pending");
        assert_eq!(parsed[1]["status"], "completed");
    }

    #[test]
    fn export_visible_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("open.csv");
        let mut session = english();
        let script = format!(
            "add --name A\nadd --name B\ndone 1\nfilter --completed off\nexport csv --visible -o \"{}\"\n",
            path.display()
        );
        run(&mut session, &script);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(written.contains("\"A\""));
    }

    #[test]
    fn export_failure_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tasks.csv");
        let mut session = english();
        let script = format!("export csv -o \"{}\"\nadd\n", path.display());
        let out = run(&mut session, &script);
        assert!(out.contains("Export Error: Export failed:"), "{out}");
        assert_eq!(session.store.len(), 1);
    }

    #[test]
    fn lang_toggles_labels() {
        let mut session = english();
        let out = run(&mut session, "lang\nlist\n");
        assert_eq!(session.lang, Language::Chinese);
        assert!(out.starts_with("语言: 中文\n"));
        assert!(out.contains("没有找到匹配的任务"));
        run(&mut session, "lang en\n");
        assert_eq!(session.lang, Language::English);
    }
}
