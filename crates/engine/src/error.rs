use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Cannot walk '{path}': {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    /// Path the error refers to, when one is known.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::FileRead { path, .. } | Self::RootUnavailable { path, .. } => Some(path),
            Self::Walk(err) => walk_error_path(err),
        }
    }
}

fn walk_error_path(err: &ignore::Error) -> Option<&std::path::Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_read_error_mentions_path() {
        let err = EngineError::FileRead {
            path: PathBuf::from("src/lib.rs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("src/lib.rs")));
        assert!(err.to_string().contains("src/lib.rs"));
    }

    #[test]
    fn walk_error_path_is_unwrapped_through_depth() {
        let inner = ignore::Error::WithPath {
            path: PathBuf::from("locked"),
            err: Box::new(ignore::Error::Io(std::io::Error::other("boom"))),
        };
        let err = EngineError::from(ignore::Error::WithDepth {
            depth: 2,
            err: Box::new(inner),
        });
        assert_eq!(err.path(), Some(std::path::Path::new("locked")));
    }
}
