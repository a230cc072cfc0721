//! Interactive session: owns the task store and the current view settings and
//! runs commands read line by line.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cmd::{dispatch, Flow, Line};
use crate::fields::Language;
use crate::i18n::{default_categories, text};
use crate::store::{StoreError, TaskStore};
use crate::view::{FilterSpec, SortSpec};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unterminated quote in input")]
    UnterminatedQuote,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// State of one todo list session.
pub struct Session {
    pub store: TaskStore,
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub lang: Language,
    assume_yes: bool,
    clock: fn() -> NaiveDateTime,
}

impl Session {
    /// New session with the default categories localized in `lang`.
    pub fn new(lang: Language, assume_yes: bool) -> Self {
        Session {
            store: TaskStore::with_categories(default_categories(lang)),
            filter: FilterSpec::default(),
            sort: SortSpec::default(),
            lang,
            assume_yes,
            clock: local_now,
        }
    }

    /// Replace the wall clock, e.g. with a fixed time.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// Localized label for `key`.
    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        text(self.lang, key)
    }

    /// Execute commands from `input` until it is exhausted or a quit command is read.
    /// Failing commands are reported on `out` and do not end the session.
    pub fn run<R: BufRead>(&mut self, mut input: R, out: &mut dyn Write) -> io::Result<()> {
        let mut console = Console { input: &mut input, out, assume_yes: self.assume_yes };
        while let Some(line) = console.next_line() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let tokens = match tokenize(trimmed) {
                Ok(tokens) => tokens,
                Err(e) => {
                    writeln!(console.out, "error: {e}")?;
                    continue;
                }
            };
            let command = match Line::try_parse_from(&tokens) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    write!(console.out, "{}", e.render())?;
                    continue;
                }
            };
            debug!(?command, "executing");
            match dispatch(self, &mut console, command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(SessionError::Io(e)) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(console.out, "error: {e}")?;
                }
            }
        }
        console.out.flush()
    }
}

/// Input and output of a running session.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
    assume_yes: bool,
}

impl Console<'_> {
    /// Next input line without its line ending, or `None` at end of input.
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD; only read
    /// failures are returned as errors.
    pub fn next_line(&mut self) -> Option<io::Result<String>> {
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(e) => return Some(Err(e)),
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = match String::from_utf8(buf) {
            Ok(line) => line,
            Err(e) => {
                let line = String::from_utf8_lossy(e.as_bytes()).into_owned();
                warn!(%line, "input line is not valid UTF-8");
                line
            }
        };
        Some(Ok(line))
    }

    /// Ask a yes/no question; anything but an explicit yes (or end of input) is no.
    pub fn confirm(&mut self, question: &str, lang: Language) -> io::Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        let yes = text(lang, "Yes");
        let no = text(lang, "No");
        write!(self.out, "{question} [{yes}/{no}] ")?;
        self.out.flush()?;
        let answer = match self.next_line() {
            Some(line) => line?,
            None => return Ok(false),
        };
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") || answer == yes)
    }
}

/// Split a command line on whitespace. Double quotes group words and may
/// produce an empty argument (`""`); `\"` inside quotes is a literal quote.
pub fn tokenize(line: &str) -> Result<Vec<String>, SessionError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            '\\' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_quotes {
        return Err(SessionError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
