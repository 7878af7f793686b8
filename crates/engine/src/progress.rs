use std::path::Path;

use crate::error::EngineError;

/// Receives progress events while a run is in flight.
pub trait ProgressSink {
    /// A matching file was counted.
    fn on_file(&mut self, path: &Path, lines: usize);

    /// An entry could not be walked or counted. The run continues.
    fn on_error(&mut self, error: &EngineError);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_file(&mut self, _path: &Path, _lines: usize) {}

    fn on_error(&mut self, _error: &EngineError) {}
}
