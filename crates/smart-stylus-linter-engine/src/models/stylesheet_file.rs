use relative_path::{RelativePath, RelativePathBuf};

/// A stylesheet found under a scan root
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StylesheetFile {
    relative_path: RelativePathBuf,
}

impl StylesheetFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        Self { relative_path }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Forward-slash path used in reports and as the document id
    pub fn display_path(&self) -> &str {
        self.relative_path.as_str()
    }

    /// Extension without the dot, if any
    pub fn extension(&self) -> Option<&str> {
        self.relative_path.extension()
    }

    /// Whether the extension is one of `extensions` (compared case-insensitively)
    pub fn has_extension(&self, extensions: &[String]) -> bool {
        self.extension()
            .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

impl From<RelativePathBuf> for StylesheetFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for StylesheetFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
