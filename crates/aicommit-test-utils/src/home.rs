//! [`TestHome`] fixture for config scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File name of the persisted store, relative to the home directory.
pub const STORE_FILE_NAME: &str = ".aicommit";

/// A temporary home directory.
///
/// # Example
///
/// ```rust,no_run
/// use aicommit_test_utils::TestHome;
///
/// let home = TestHome::new();
/// home.write_store("MODEL=gpt-4o\n");
/// home.assert_store_contains("MODEL=gpt-4o");
/// ```
pub struct TestHome {
    temp_dir: TempDir,
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHome {
    /// Create an empty home directory, as on first run.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestHome::new: failed to create temp dir"),
        }
    }

    /// Home directory with a store already holding `content`.
    pub fn with_store(content: &str) -> Self {
        let home = Self::new();
        home.write_store(content);
        home
    }

    /// Root of the home directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the persisted store.
    pub fn store_path(&self) -> PathBuf {
        self.path().join(STORE_FILE_NAME)
    }

    /// Overwrite the persisted store.
    pub fn write_store(&self, content: &str) {
        fs::write(self.store_path(), content)
            .unwrap_or_else(|e| panic!("TestHome::write_store: {}", e));
    }

    /// Current store content, `None` when the file does not exist.
    pub fn read_store(&self) -> Option<String> {
        fs::read_to_string(self.store_path()).ok()
    }

    /// Raw bytes of the store, for byte-for-byte comparisons.
    pub fn store_bytes(&self) -> Option<Vec<u8>> {
        fs::read(self.store_path()).ok()
    }

    /// Assert the store file exists.
    pub fn assert_store_exists(&self) {
        assert!(
            self.store_path().exists(),
            "Expected config file at {}",
            self.store_path().display()
        );
    }

    /// Assert the store file does not exist.
    pub fn assert_no_store(&self) {
        assert!(
            !self.store_path().exists(),
            "Expected no config file at {}",
            self.store_path().display()
        );
    }

    /// Assert the store contains `needle`.
    pub fn assert_store_contains(&self, needle: &str) {
        let content = self
            .read_store()
            .unwrap_or_else(|| panic!("No config file at {}", self.store_path().display()));
        assert!(
            content.contains(needle),
            "Config file should contain {:?}, got:\n{}",
            needle,
            content
        );
    }
}
