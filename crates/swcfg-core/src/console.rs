//! Console reporter: the only place user-facing lines are written.
//!
//! Every line starts with `@ ` so a wrapper chaining several migration
//! tools can pick intentional status output out of anything else that
//! reaches stdout.

use std::fmt::Display;
use std::io::{self, Stdout, Write};

/// Prefix marking a line as user-facing output.
pub const SENTINEL: &str = "@";

/// Line-oriented reporter over any writer.
pub struct Console<W: Write> {
    out: W,
}

impl Console<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Emit one sentinel-prefixed line. An empty message yields a bare `@ `.
    pub fn line(&mut self, message: impl Display) {
        let _ = writeln!(self.out, "{SENTINEL} {message}");
    }

    /// Emit every line of a multi-line block (help text and the like).
    pub fn block(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line.trim_end());
        }
    }

    pub fn info(&mut self, message: impl Display) {
        self.line(message);
    }

    /// Non-fatal: the item is skipped and processing continues.
    pub fn warning(&mut self, message: impl Display) {
        self.line(format_args!("WARNING: {message}"));
    }

    /// Fatal: the caller terminates right after reporting.
    pub fn error(&mut self, message: impl Display) {
        self.line(format_args!("ERROR: {message}"));
        let _ = self.out.flush();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
