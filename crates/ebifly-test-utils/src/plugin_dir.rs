//! [`TestPluginDir`] builder for loader scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use ebifly_config::{ConfigLoader, DEFAULT_CONFIG};
use tempfile::TempDir;

/// A temporary plugin data directory.
///
/// # Example
///
/// ```rust,no_run
/// use ebifly_test_utils::TestPluginDir;
///
/// let dir = TestPluginDir::new();
/// dir.write_config("flySpeed: 1\n");
/// let loader = dir.loader();
/// dir.assert_file_exists("config.yml");
/// ```
pub struct TestPluginDir {
    temp_dir: TempDir,
}

impl Default for TestPluginDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPluginDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// A loader over this directory using the bundled schema.
    pub fn loader(&self) -> ConfigLoader {
        ConfigLoader::new(self.root())
    }

    /// Write `config.yml` with the given content.
    pub fn write_config(&self, content: &str) {
        fs::write(self.path("config.yml"), content).unwrap();
    }

    /// Write the bundled schema with `from` replaced by `to`.
    ///
    /// # Panics
    /// Panics if `from` does not occur in the schema, so a stale test
    /// cannot silently load the untouched defaults.
    pub fn write_default_config_with(&self, from: &str, to: &str) {
        assert!(
            DEFAULT_CONFIG.contains(from),
            "default config does not contain {:?}",
            from
        );
        self.write_config(&DEFAULT_CONFIG.replacen(from, to, 1));
    }

    /// Read a file relative to the directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name))
            .unwrap_or_else(|_| panic!("Could not read file: {}", self.path(name).display()))
    }

    /// Assert that `name` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file does not exist.
    pub fn assert_file_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `name` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file exists.
    pub fn assert_file_not_exists(&self, name: &str) {
        let full_path = self.path(name);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `name` contains `content`.
    pub fn assert_file_contains(&self, name: &str, content: &str) {
        let file_content = self.read(name);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            name,
            content,
            file_content
        );
    }
}
