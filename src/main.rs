//! # todo - session todo list
//!
//! A line-driven todo list for the terminal. Tasks carry a due date, a
//! priority, an estimated workload, a category and a completion flag, and can
//! be filtered, sorted, reordered and exported.
//!
//! ## Key Features
//!
//! - **Ordered task list**: tasks keep the order you give them (`mv`), sorting only changes the view
//! - **Filtering**: show completed and/or incomplete tasks, search name, description and category
//! - **Sorting**: by priority, due date or creation date, ascending or descending, always stable
//! - **Categories**: add and remove labels; removing one leaves tasks filed under it untouched
//! - **Statistics**: totals, completion rate, high-priority and overdue counts
//! - **Export**: CSV, JSON or Markdown with localized column names
//! - **Two languages**: Chinese (default) and English labels, switchable at runtime
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive session in English
//! todo --lang en
//!
//! # Run a prepared script, answering yes to delete prompts
//! todo --lang en --script plan.txt --yes
//! ```
//!
//! A session script looks like this:
//!
//! ```text
//! add --name "Write report" --priority high --due 2024-01-10
//! add --name Gym --category Personal
//! done 1
//! sort priority --desc
//! list
//! export markdown -o tasks.md
//! ```
//!
//! Nothing is saved between sessions; use `export` to keep a copy.
//! Set `RUST_LOG=debug` to trace store mutations on stderr.

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod cmd;
pub mod export;
pub mod fields;
pub mod i18n;
pub mod session;
pub mod stats;
pub mod store;
pub mod task;
pub mod view;

use cli::{Cli, Commands};
use cmd::cmd_completions;
use session::Session;

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        cmd_completions(shell);
        return;
    }

    let mut session = Session::new(cli.lang, cli.yes);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.script {
        Some(path) => match File::open(path) {
            Ok(file) => session.run(BufReader::new(file), &mut out),
            Err(e) => {
                eprintln!("Failed to open script {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => session.run(io::stdin().lock(), &mut out),
    };

    if let Err(e) = result {
        eprintln!("Session error: {e}");
        std::process::exit(1);
    }
}
