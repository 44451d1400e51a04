//! Persisted store handles
//!
//! The config engine never touches the filesystem directly. It goes through
//! a [`Store`], which is a [`FileStore`] in production and a
//! [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::{Result, io};

/// A single persisted text blob.
pub trait Store: fmt::Debug {
    /// Whether the blob exists. Never fails; a missing blob is a valid state.
    fn exists(&self) -> bool;

    /// Read the full text content.
    fn read(&self) -> Result<String>;

    /// Replace the full text content.
    fn write(&self, content: &str) -> Result<()>;

    /// Human-readable location, used in messages.
    fn location(&self) -> String;
}

/// Store backed by a single file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for FileStore {
    fn exists(&self) -> bool {
        io::file_exists(&self.path)
    }

    fn read(&self) -> Result<String> {
        io::read_text(&self.path)
    }

    fn write(&self, content: &str) -> Result<()> {
        io::write_text(&self.path, content)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory store for tests.
///
/// Clones share the same underlying buffer, so a test can hand one clone to
/// the resolver and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    content: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    /// An empty store, as on first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Rc::new(RefCell::new(Some(content.into()))),
        }
    }

    /// Snapshot of the current content, `None` if never written.
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn exists(&self) -> bool {
        self.content.borrow().is_some()
    }

    fn read(&self) -> Result<String> {
        self.content.borrow().clone().ok_or_else(|| {
            crate::Error::io(
                "<memory>",
                std::io::Error::new(std::io::ErrorKind::NotFound, "store is empty"),
            )
        })
    }

    fn write(&self, content: &str) -> Result<()> {
        *self.content.borrow_mut() = Some(content.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
