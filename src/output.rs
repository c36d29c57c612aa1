//! Console progress reporting.
//!
//! Progress lines are indented by nesting level and colored by style.
//! They are purely informational: a failed write to the sink is logged
//! and otherwise ignored.

use colored::Colorize;
use std::fmt::Display;
use std::io::Write;

const INDENT_WIDTH: usize = 4;

/// Visual style of a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Success,
    Error,
}

/// Writes indented, colored progress lines to a sink.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes one line at `level`, indented by `level * 4 + 1` spaces.
    pub fn message(&mut self, level: usize, style: Style, message: impl Display) {
        let spaces = " ".repeat(level * INDENT_WIDTH + 1);
        let text = message.to_string();
        let result = match style {
            Style::Plain => writeln!(self.out, "{}{}", spaces, text),
            Style::Success => writeln!(self.out, "{}{}", spaces, text.green()),
            Style::Error => writeln!(self.out, "{}{}", spaces, text.red()),
        };

        if let Err(e) = result {
            log::debug!("Failed to write progress line: {}", e);
        }
    }

    pub fn plain(&mut self, level: usize, message: impl Display) {
        self.message(level, Style::Plain, message);
    }

    pub fn success(&mut self, level: usize, message: impl Display) {
        self.message(level, Style::Success, message);
    }

    pub fn error(&mut self, level: usize, message: impl Display) {
        self.message(level, Style::Error, message);
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
