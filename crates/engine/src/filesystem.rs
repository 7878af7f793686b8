use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// A filesystem object reached by the walk.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub metadata: Metadata,
}

impl Entry {
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }
}

/// Per-entry callback for [`walk`].
///
/// Failures for a single entry arrive as `Err` and never stop the walk.
pub trait Visitor {
    fn visit(&mut self, entry: Result<Entry>);
}

impl<F> Visitor for F
where
    F: FnMut(Result<Entry>),
{
    fn visit(&mut self, entry: Result<Entry>) {
        self(entry);
    }
}

/// Sequential recursive directory walk.
///
/// Visits `root` itself and every descendant. Hidden files and ignore files
/// get no special treatment and symlinks are not followed.
///
/// # Errors
/// Returns [`EngineError::RootUnavailable`] if `root` cannot be stat'ed.
/// Errors for individual entries are handed to `visitor` instead.
pub fn walk<V: Visitor + ?Sized>(root: &Path, visitor: &mut V) -> Result<()> {
    std::fs::metadata(root).map_err(|e| EngineError::RootUnavailable {
        path: root.to_path_buf(),
        source: e,
    })?;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(std::ffi::OsStr::cmp)
        .build();

    for result in walker {
        let entry = result.map_err(EngineError::from).and_then(|entry| {
            let metadata = entry.metadata()?;
            Ok(Entry {
                path: entry.into_path(),
                metadata,
            })
        });
        visitor.visit(entry);
    }

    Ok(())
}
