use crate::error::EngineError;

/// Per-run counters. Only ever incremented; never reset mid-run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    files: u64,
    lines: u64,
    errors: u64,
}

impl RunStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: 0,
            lines: 0,
            errors: 0,
        }
    }

    /// Record one successfully counted file.
    pub fn record_file(&mut self, lines: usize) {
        self.files = self.files.saturating_add(1);
        self.lines = self.lines.saturating_add(lines as u64);
    }

    pub fn record_error(&mut self) {
        self.errors = self.errors.saturating_add(1);
    }

    #[must_use]
    pub const fn files(&self) -> u64 {
        self.files
    }

    #[must_use]
    pub const fn lines(&self) -> u64 {
        self.lines
    }

    #[must_use]
    pub const fn errors(&self) -> u64 {
        self.errors
    }
}

/// Outcome of one run.
///
/// `walk_error` is set only when the traversal could not start; per-entry
/// failures are already folded into `stats.errors()`.
#[derive(Debug)]
pub struct RunResult {
    pub stats: RunStats,
    pub walk_error: Option<EngineError>,
}
