//! Colored terminal output with verbosity control.

use crate::assembler::AdvisorySink;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

/// Writes user-facing messages to stdout/stderr.
///
/// Advisories always go to stderr. Everything else is suppressed in quiet
/// mode, and `verbose` lines appear only in verbose mode. Markers and headers
/// are colored when the stream is a terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Plain informational line.
    pub fn info(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout().lock(), "{message}")
    }

    /// Detail line, verbose mode only.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.verbose || self.quiet {
            return Ok(());
        }
        writeln!(io::stdout().lock(), "  {message}")
    }

    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        write_marked(&mut stdout(), Color::Green, "✓ ", message)
    }

    pub fn warn(&self, message: &str) -> io::Result<()> {
        let mut stderr = stderr();
        for (i, line) in message.lines().enumerate() {
            if i == 0 {
                write_marked(&mut stderr, Color::Yellow, "⚠ ", line)?;
            } else {
                writeln!(stderr, "  {line}")?;
            }
        }
        Ok(())
    }

    /// Section header with an underline.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = stdout();
        writeln!(stdout)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        writeln!(stdout, "{title}")?;
        stdout.reset()?;
        writeln!(stdout, "{}", "─".repeat(title.chars().count()))
    }

    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout().lock(), "    {message}")
    }
}

impl AdvisorySink for OutputManager {
    fn advise(&self, message: &str) {
        if let Err(e) = self.warn(message) {
            log::warn!("Failed to print advisory: {e}");
        }
    }
}

fn stdout() -> StandardStream {
    StandardStream::stdout(color_choice(io::stdout().is_terminal()))
}

fn stderr() -> StandardStream {
    StandardStream::stderr(color_choice(io::stderr().is_terminal()))
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Writes `marker` in bold `color`, then `message` uncolored.
fn write_marked(
    stream: &mut StandardStream,
    color: Color,
    marker: &str,
    message: &str,
) -> io::Result<()> {
    stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stream, "{marker}")?;
    stream.reset()?;
    writeln!(stream, "{message}")
}
