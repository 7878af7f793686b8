// crates/cli/src/presentation.rs
use crate::style::Palette;
use line_tally_engine::config::Config;
use line_tally_engine::error::EngineError;
use line_tally_engine::progress::ProgressSink;
use line_tally_engine::stats::RunResult;
use std::io::{self, Write};
use std::path::Path;

const RULE: &str = "----------------------------------------------------";

/// Prints progress and diagnostics as the engine reports them.
///
/// `ProgressSink` callbacks cannot fail, so the first write error is kept and
/// returned from [`ConsoleReporter::finish`].
pub struct ConsoleReporter<W: Write> {
    out: W,
    palette: Palette,
    failed: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(out: W, palette: Palette) -> Self {
        Self {
            out,
            palette,
            failed: None,
        }
    }

    /// Hand back the writer, or the first write error seen.
    ///
    /// # Errors
    /// Returns the first I/O error raised while printing progress.
    pub fn finish(self) -> io::Result<W> {
        match self.failed {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(line).and_then(|()| self.out.write_all(b"\n")) {
            self.failed = Some(e);
        }
    }
}

impl<W: Write> ProgressSink for ConsoleReporter<W> {
    fn on_file(&mut self, path: &Path, lines: usize) {
        let p = self.palette;
        self.emit(format_args!(
            "{} {} {}",
            p.green("counted"),
            path.display(),
            p.dim(format!("({lines} lines)"))
        ));
    }

    fn on_error(&mut self, error: &EngineError) {
        let p = self.palette;
        self.emit(format_args!("{} {error}", p.red("error")));
    }
}

/// Announce the root and extension before the walk starts.
///
/// # Errors
/// Returns any error raised by `out`.
pub fn print_start_banner<W: Write>(
    out: &mut W,
    config: &Config,
    palette: Palette,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", palette.cyan(RULE))?;
    writeln!(
        out,
        "{}",
        palette.bold(palette.blue(format!(
            "  Scanning '{}' for '{}' files...",
            config.root.display(),
            config.extension
        )))
    )?;
    writeln!(out, "{}", palette.cyan(RULE))
}

/// Mark the end of the walk, ahead of the summary.
///
/// # Errors
/// Returns any error raised by `out`.
pub fn print_complete_banner<W: Write>(out: &mut W, palette: Palette) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", palette.cyan(RULE))?;
    writeln!(out, "{}", palette.bold(palette.green("  Scan complete!")))?;
    writeln!(out, "{}", palette.cyan(RULE))
}

/// Print the walk-level error (if any) and the closing summary block.
///
/// # Errors
/// Returns any error raised by `out`.
pub fn print_summary<W: Write>(
    out: &mut W,
    config: &Config,
    result: &RunResult,
    palette: Palette,
) -> io::Result<()> {
    if let Some(err) = &result.walk_error {
        writeln!(out, "{} {err}", palette.red("walk failed:"))?;
    }

    let stats = &result.stats;
    writeln!(out)?;
    writeln!(out, "{}", palette.bold("Summary"))?;
    writeln!(out, "  Root:            {}", config.root.display())?;
    writeln!(out, "  Extension:       {}", palette.yellow(&config.extension))?;
    writeln!(out, "  Files processed: {}", palette.bold(stats.files()))?;
    writeln!(out, "  Total lines:     {}", palette.bold(stats.lines()))?;
    if stats.errors() > 0 {
        writeln!(out, "  Errors:          {}", palette.red(stats.errors()))?;
    }
    writeln!(out, "{}", palette.cyan(RULE))?;
    out.flush()
}
