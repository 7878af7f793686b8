use crate::options::Extension;
use std::path::PathBuf;

/// Inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub extension: Extension,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<Extension>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }
}
