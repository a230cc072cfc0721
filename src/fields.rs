//! Enumerations and field types for the todo list.
//!
//! This module defines the ordinal levels used to classify tasks, the sort keys
//! offered by the task view, the supported export formats and display languages.

use clap::ValueEnum;

/// Task importance. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

/// Estimated effort. Ordered `Small < Medium < Large`.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Workload {
    #[default]
    Small,
    Medium,
    Large,
}

impl Priority {
    /// Ordinal position (0, 1 or 2).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Workload {
    /// Ordinal position (0, 1 or 2).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Keys the task view can be ordered by.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the user-defined store order.
    #[default]
    None,
    Priority,
    DueDate,
    CreatedDate,
}

impl SortKey {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Text formats the exporter can produce.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Markdown,
}

impl ExportFormat {
    /// Display name of the format, as shown in export messages.
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Markdown => "Markdown",
        }
    }

    /// File extension: the lower-cased format name (`markdown`, not `md`).
    pub fn extension(self) -> String {
        self.name().to_lowercase()
    }
}

/// Display language. Affects labels only, never stored data.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Language {
    #[default]
    #[value(name = "zh", alias = "chinese")]
    Chinese,
    #[value(name = "en", alias = "english")]
    English,
}

impl Language {
    /// The other language of the pair.
    pub fn toggled(self) -> Self {
        match self {
            Language::Chinese => Language::English,
            Language::English => Language::Chinese,
        }
    }

    /// Symbolic localization key naming this language.
    pub fn key(self) -> &'static str {
        match self {
            Language::Chinese => "Chinese",
            Language::English => "English",
        }
    }
}

/// On/off switch accepted by the `filter` command.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(t: Toggle) -> bool {
        t == Toggle::On
    }
}
