//! Paths inside the plugin data directory

use std::path::{Path, PathBuf};

use crate::DataFile;

/// A path kept with forward slashes so it prints the same on every platform.
///
/// Diagnostics and CLI output show this form. [`to_native`](Self::to_native)
/// is used only where the filesystem is touched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(path.as_ref().to_string_lossy().replace('\\', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// Append `segment`. An empty base yields the segment alone.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        match self.0.as_str() {
            "" => Self(segment),
            base => Self(format!("{}/{}", base.trim_end_matches('/'), segment)),
        }
    }

    /// Location of `file` when `self` is a plugin data directory.
    pub fn data_file(&self, file: DataFile) -> Self {
        self.join(file.as_str())
    }

    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NormalizedPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}
