//! Colored terminal output for release runs.
//!
//! Progress, warnings and summaries go to stdout and are silenced by quiet
//! mode. Failures always go to stderr.

use crate::error::ReleaseError;
use std::io::{self, Write};
use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Dirty paths listed before the rest are summarized
pub const MAX_LISTED_PATHS: usize = 10;

/// Output manager for release progress and results
#[derive(Debug)]
pub struct OutputManager {
    stdout: BufferWriter,
    verbose: bool,
    quiet: bool,
}

impl Clone for OutputManager {
    fn clone(&self) -> Self {
        Self::new(self.verbose, self.quiet)
    }
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            stdout: BufferWriter::stdout(ColorChoice::Auto),
            verbose,
            quiet,
        }
    }

    /// Write `marker message` with the marker (and optionally the message) colored
    fn marked(
        buffer: &mut Buffer,
        marker: &str,
        color: Color,
        color_message: bool,
        message: &str,
    ) -> io::Result<()> {
        buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(buffer, "{}", marker)?;
        buffer.reset()?;
        if color_message {
            buffer.set_color(ColorSpec::new().set_fg(Some(color)))?;
        }
        writeln!(buffer, " {}", message)?;
        buffer.reset()
    }

    fn emit(
        &self,
        marker: &str,
        color: Color,
        color_message: bool,
        message: &str,
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut buffer = self.stdout.buffer();
        Self::marked(&mut buffer, marker, color, color_message, message)?;
        self.stdout.print(&buffer)
    }

    /// A step that is starting
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.emit("⋯", Color::Magenta, false, message)
    }

    /// A completed release
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.emit("✓", Color::Green, false, message)
    }

    /// A non-fatal condition the operator should notice
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.emit("⚠", Color::Yellow, true, message)
    }

    /// Detail shown only with `--verbose`
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        self.emit("→", Color::Blue, false, message)
    }

    /// Indented sub-item
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.println(&format!("    {}", message))
    }

    /// Plain line
    pub fn println(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut buffer = self.stdout.buffer();
        writeln!(buffer, "{}", message)?;
        self.stdout.print(&buffer)
    }

    /// Error line on stderr, shown even in quiet mode
    pub fn error(&self, message: &str) {
        let stderr = BufferWriter::stderr(ColorChoice::Auto);
        let mut buffer = stderr.buffer();
        if Self::marked(&mut buffer, "✗", Color::Red, true, message)
            .and_then(|()| stderr.print(&buffer))
            .is_err()
        {
            eprintln!("✗ {}", message);
        }
    }

    /// Warn that the run will leave the current branch
    pub fn branch_switch(&self, current: &str, required: &str) -> io::Result<()> {
        self.warn(&format!(
            "Currently on '{}'; the release will switch to '{}'",
            current, required
        ))
    }

    /// List uncommitted paths, capped at [`MAX_LISTED_PATHS`]
    pub fn dirty_tree(&self, paths: &[String], forced: bool) -> io::Result<()> {
        let verb = if forced {
            "Releasing"
        } else {
            "Refusing to release"
        };
        self.warn(&format!("{} with {} uncommitted path(s):", verb, paths.len()))?;
        for path in paths.iter().take(MAX_LISTED_PATHS) {
            self.indent(path)?;
        }
        if paths.len() > MAX_LISTED_PATHS {
            self.indent(&format!("... and {} more", paths.len() - MAX_LISTED_PATHS))?;
        }
        Ok(())
    }

    /// Report a failed run: the failing step on stderr, then recovery hints
    pub fn release_failure(&self, error: &ReleaseError) {
        let headline = match error.step() {
            Some(step) => format!("Release failed at step '{}': {}", step, error),
            None => format!("Release failed: {}", error),
        };
        self.error(&headline);

        let suggestions = error.recovery_suggestions();
        if suggestions.is_empty() {
            return;
        }
        let _ = self.println("\nRecovery suggestions:");
        for suggestion in suggestions {
            let _ = self.indent(&format!("• {}", suggestion));
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}
