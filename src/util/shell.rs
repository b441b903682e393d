//! Status-line output for the CLI.
//!
//! Every line the user is meant to read goes through [`Shell`]: a status word
//! right-aligned to a fixed column, coloured when stderr allows it, then the
//! message. Library diagnostics go through `tracing` instead.

use std::fmt::Display;
use std::io::{self, IsTerminal};

/// When to colour status words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colour only when stderr is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(format!(
                "unknown color choice `{}` (use auto, always or never)",
                other
            )),
        }
    }
}

/// Word printed in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Added,
    Removed,
    Updated,
    Finished,
    Requesting,
    Info,
    Skipped,
    Warning,
    Error,
}

const GREEN: &str = "\x1b[1;32m";
const CYAN: &str = "\x1b[1;36m";
const BLUE: &str = "\x1b[1;34m";
const YELLOW: &str = "\x1b[1;33m";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

impl Status {
    /// Label and ANSI colour of the status word.
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Status::Added => ("Added", GREEN),
            Status::Removed => ("Removed", GREEN),
            Status::Updated => ("Updated", GREEN),
            Status::Finished => ("Finished", GREEN),
            Status::Requesting => ("Requesting", CYAN),
            Status::Info => ("Info", BLUE),
            Status::Skipped => ("Skipped", YELLOW),
            Status::Warning => ("Warning", YELLOW),
            Status::Error => ("error", RED),
        }
    }
}

/// Column the status word is right-aligned to.
const STATUS_WIDTH: usize = 12;

/// Writes status lines to stderr.
#[derive(Debug)]
pub struct Shell {
    quiet: bool,
    use_color: bool,
}

impl Shell {
    /// Create a shell from the `--quiet` and `--color` flags.
    pub fn from_flags(quiet: bool, color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Shell { quiet, use_color }
    }

    /// Print a status line. Quiet shells print errors only.
    pub fn status(&self, status: Status, msg: impl Display) {
        if self.quiet && status != Status::Error {
            return;
        }
        eprintln!("{} {}", self.format_status(status), msg);
    }

    pub fn note(&self, msg: impl Display) {
        self.status(Status::Info, msg);
    }

    pub fn warn(&self, msg: impl Display) {
        self.status(Status::Warning, msg);
    }

    pub fn error(&self, msg: impl Display) {
        self.status(Status::Error, msg);
    }

    fn format_status(&self, status: Status) -> String {
        let (label, color) = status.style();
        if self.use_color {
            format!("{color}{label:>STATUS_WIDTH$}{RESET}")
        } else {
            format!("{label:>STATUS_WIDTH$}")
        }
    }
}
