//! Whole-file text I/O

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::{Error, Result};

/// Write content to a file by replacing it wholesale.
///
/// The content lands in a sibling temp file first and is then renamed over
/// the target, so a reader never sees a half-written file. No lock is taken:
/// concurrent writers race and the last rename wins.
///
/// An existing target keeps its identity: a symlink is followed and its real
/// file is replaced, and the previous permissions carry over to the new file.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let resolved = fs::canonicalize(path).ok();
    let path = resolved.as_deref().unwrap_or(path);
    let previous_permissions = fs::metadata(path).ok().map(|m| m.permissions());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Same directory keeps the rename on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .write_all(content)
        .and_then(|_| match previous_permissions {
            Some(permissions) => temp_file.set_permissions(permissions),
            None => Ok(()),
        })
        .and_then(|_| temp_file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            Error::io(&temp_path, e)
        })?;
    drop(temp_file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        Error::io(path, e)
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Non-failing existence check.
///
/// Permission problems surface later, when the file is actually read.
pub fn file_exists(path: &Path) -> bool {
    path.exists()
}
