use std::fmt;
use std::path::Path;

/// 正規化済みの拡張子フィルタ（常にドット1つで始まる）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// Normalize raw user input into a filter.
    ///
    /// Surrounding whitespace is trimmed and all leading dots are stripped
    /// before a single dot is prepended, so `"txt"`, `".txt"` and
    /// `" .txt\n"` all become `".txt"`. Empty input yields a bare `"."`.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let stem = raw.trim().trim_start_matches('.');
        Self(format!(".{stem}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-sensitive suffix match against the file name of `path`.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(self.0.as_str()))
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Extension {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}
