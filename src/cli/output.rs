//! Terminal output for deployer runs.
//!
//! All user-facing lines, including failures, go to standard output.

use crate::deployer::ProgressSink;
use std::io::{self, Write};

/// Writes progress, success and error lines to stdout.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager. Quiet mode keeps only errors.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Prints a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout().lock(), "{}", title)
    }

    /// Prints a progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout().lock(), "{}", message)
    }

    /// Prints an indented detail line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout().lock(), "  {}", message)
    }

    /// Prints an error with its recovery suggestions. Never suppressed.
    pub fn error(&self, message: &str, suggestions: &[String]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "Error: {}", message)?;
        for suggestion in suggestions {
            writeln!(out, "{}", suggestion)?;
        }
        Ok(())
    }
}

impl ProgressSink for OutputManager {
    fn step(&self, message: &str) {
        if let Err(e) = self.progress(message) {
            log::warn!("Failed to write progress: {}", e);
        }
    }
}
