// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod progress;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::{Entry, Visitor};
use crate::options::Extension;
use crate::progress::ProgressSink;
use crate::stats::{RunResult, RunStats};

/// Walk `config.root` and count lines of every file matching `config.extension`.
///
/// Entry-level failures are counted in the returned stats and forwarded to
/// `sink`; they never abort the run. A root that cannot be walked at all is
/// reported through `RunResult::walk_error` alongside whatever was counted.
pub fn run<S: ProgressSink + ?Sized>(config: &Config, sink: &mut S) -> RunResult {
    tracing::info!(
        root = %config.root.display(),
        extension = %config.extension,
        "scan started"
    );

    let mut visitor = ScanVisitor {
        extension: &config.extension,
        stats: RunStats::new(),
        sink,
    };
    let walk_error = filesystem::walk(&config.root, &mut visitor).err();
    let stats = visitor.stats;

    if let Some(err) = &walk_error {
        tracing::debug!(error = %err, "walk aborted");
    }
    tracing::info!(
        files = stats.files(),
        lines = stats.lines(),
        errors = stats.errors(),
        "scan finished"
    );

    RunResult { stats, walk_error }
}

struct ScanVisitor<'a, S: ?Sized> {
    extension: &'a Extension,
    stats: RunStats,
    sink: &'a mut S,
}

impl<S: ProgressSink + ?Sized> Visitor for ScanVisitor<'_, S> {
    fn visit(&mut self, entry: Result<Entry>) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(path = ?err.path(), error = %err, "entry skipped");
                self.stats.record_error();
                self.sink.on_error(&err);
                return;
            }
        };

        if entry.is_dir() || !self.extension.matches(&entry.path) {
            tracing::trace!(path = %entry.path.display(), "not counted");
            return;
        }

        match processor::count_file_lines(&entry.path) {
            Ok(lines) => {
                tracing::debug!(path = %entry.path.display(), lines, "counted");
                self.stats.record_file(lines);
                self.sink.on_file(&entry.path, lines);
            }
            Err(err) => {
                tracing::debug!(path = %entry.path.display(), error = %err, "count failed");
                self.stats.record_error();
                self.sink.on_error(&err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct Events {
        files: Vec<(PathBuf, usize)>,
        errors: usize,
    }

    impl ProgressSink for Events {
        fn on_file(&mut self, path: &Path, lines: usize) {
            self.files.push((path.to_path_buf(), lines));
        }

        fn on_error(&mut self, _error: &EngineError) {
            self.errors += 1;
        }
    }

    #[test]
    fn test_traversal_error_is_counted_and_walk_continues() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("kept.txt");
        std::fs::write(&file, "a\nb\n").unwrap();

        let extension = Extension::normalize("txt");
        let mut sink = Events::default();
        let mut visitor = ScanVisitor {
            extension: &extension,
            stats: RunStats::new(),
            sink: &mut sink,
        };

        visitor.visit(Err(EngineError::Walk(ignore::Error::WithPath {
            path: dir.path().join("locked"),
            err: Box::new(ignore::Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            ))),
        })));
        visitor.visit(Ok(Entry {
            metadata: std::fs::metadata(&file).unwrap(),
            path: file.clone(),
        }));
        let stats = visitor.stats;

        assert_eq!(stats.errors(), 1);
        assert_eq!(stats.files(), 1);
        assert_eq!(stats.lines(), 2);
        assert_eq!(sink.errors, 1);
        assert_eq!(sink.files, vec![(file, 2)]);
    }
}
