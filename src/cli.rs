use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::fields::Language;

/// Interactive todo list session.
/// Commands are read line by line from stdin, or from --script.
#[derive(Parser)]
#[command(name = "todo", version, about = "Todo list with filtering, sorting, categories and export")]
pub struct Cli {
    /// Display language for labels and exported column names.
    #[arg(long, value_enum, env = "TODO_LANG", default_value_t = Language::Chinese)]
    pub lang: Language,

    /// Read session commands from this file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Answer yes to every delete confirmation.
    #[arg(long, short = 'y')]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
