//! Export of task sequences to CSV, JSON and Markdown text.
//!
//! The layouts are fixed for compatibility with files produced by earlier
//! versions of the tool. In particular, string values are written verbatim:
//! quotes, commas and newlines inside a name or description are NOT escaped and
//! will corrupt the CSV/JSON structure. Enum columns are localized everywhere
//! except JSON `status` and the Markdown completion glyph.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::fields::{ExportFormat, Language};
use crate::i18n::{completion_label, priority_label, text, workload_label};
use crate::task::Task;

const DATE_FMT: &str = "%Y-%m-%d";
const MARKDOWN_SEPARATOR: &str = "|----------|------|----------|------|--------|--------|------|";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render `tasks` in `format`, in input order.
pub fn export(tasks: &[Task], format: ExportFormat, lang: Language) -> String {
    match format {
        ExportFormat::Csv => to_csv(tasks, lang),
        ExportFormat::Json => to_json(tasks, lang),
        ExportFormat::Markdown => to_markdown(tasks, lang),
    }
}

/// Render `tasks` and write them to `path` in a single write. Returns the
/// number of bytes written; a failed write is returned to the caller, not retried.
pub fn export_to_file(tasks: &[Task], format: ExportFormat, lang: Language, path: &Path) -> Result<usize, ExportError> {
    let content = export(tasks, format, lang);
    fs::write(path, &content).map_err(|source| ExportError::Io { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), format = format.name(), tasks = tasks.len(), "tasks exported");
    Ok(content.len())
}

/// Default file name for an export: `tasks.<extension>`.
pub fn default_file_name(format: ExportFormat) -> String {
    format!("tasks.{}", format.extension())
}

fn header_labels(lang: Language) -> [&'static str; 7] {
    ["TaskName", "Description", "DueDate", "Category", "Priority", "Workload", "Completed"].map(|k| text(lang, k))
}

fn to_csv(tasks: &[Task], lang: Language) -> String {
    let mut out = header_labels(lang).join(",");
    out.push('\n');
    for t in tasks {
        let _ = writeln!(
            out,
            "\"{}\",\"{}\",{},{},{},{},{}",
            t.name,
            t.description,
            t.due_date.format(DATE_FMT),
            t.category,
            priority_label(lang, t.priority),
            workload_label(lang, t.workload),
            completion_label(lang, t.completed),
        );
    }
    out
}

fn to_json(tasks: &[Task], lang: Language) -> String {
    let mut out = String::from("[\n");
    for (i, t) in tasks.iter().enumerate() {
        out.push_str("  {\n");
        let _ = writeln!(out, "    \"name\": \"{}\",", t.name);
        let _ = writeln!(out, "    \"description\": \"{}\",", t.description);
        let _ = writeln!(out, "    \"dueDate\": \"{}\",", t.due_date.format(DATE_FMT));
        let _ = writeln!(out, "    \"category\": \"{}\",", t.category);
        let _ = writeln!(out, "    \"priority\": \"{}\",", priority_label(lang, t.priority));
        let _ = writeln!(out, "    \"workload\": \"{}\",", workload_label(lang, t.workload));
        let _ = writeln!(out, "    \"status\": \"{}\",", if t.completed { "completed" } else { "pending" });
        let _ = writeln!(out, "    \"created\": \"{}\"", t.created_at().format(DATE_FMT));
        out.push_str("  }");
        if i + 1 < tasks.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push(']');
    out
}

fn to_markdown(tasks: &[Task], lang: Language) -> String {
    let mut out = format!("# {}\n\n", text(lang, "TaskList"));
    let _ = writeln!(out, "| {} |", header_labels(lang).join(" | "));
    out.push_str(MARKDOWN_SEPARATOR);
    out.push('\n');
    for t in tasks {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} |",
            t.name,
            t.description,
            t.due_date.format(DATE_FMT),
            t.category,
            priority_label(lang, t.priority),
            workload_label(lang, t.workload),
            if t.completed { "✅" } else { "❌" },
        );
    }
    out
}
