//!
//! The test resource.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// The test resource, used both as a template input and as an expected output.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestResource {
    /// The content written directly in the test document.
    Inline(String),
    /// The content stored in a separate file.
    File(PathBuf),
}

impl TestResource {
    ///
    /// A shortcut constructor.
    ///
    pub fn inline(content: impl Into<String>) -> Self {
        Self::Inline(content.into())
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    ///
    /// Reads the resource content.
    ///
    /// Relative file paths are resolved against the current directory.
    ///
    pub fn read(&self) -> anyhow::Result<String> {
        match self {
            Self::Inline(content) => Ok(content.to_owned()),
            Self::File(path) => std::fs::read_to_string(path).map_err(|error| {
                anyhow::anyhow!("Failed to read test resource {path:?}: {error}")
            }),
        }
    }

    ///
    /// Returns the resource with a relative file path rebased onto `base`.
    ///
    pub fn relative_to(self, base: &Path) -> Self {
        match self {
            Self::File(path) if path.is_relative() => Self::File(base.join(path)),
            resource => resource,
        }
    }
}

impl std::fmt::Display for TestResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline(content) => write!(f, "<inline, {} bytes>", content.len()),
            Self::File(path) => write!(f, "{}", path.to_string_lossy()),
        }
    }
}
