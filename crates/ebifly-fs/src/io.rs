//! Locked, atomic file I/O and the backup rename

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Replace `path` with `content` without ever exposing a partial file.
///
/// The bytes go to a hidden sibling file, written under an exclusive `fs2`
/// lock and synced, which is then renamed over `path`. Missing parent
/// directories are created. On failure the sibling is removed and `path`
/// is untouched.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = path.to_native();

    if let Some(dir) = target.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }

    let staging = staging_path(&target);
    let written = write_locked(&staging, &target, content)
        .and_then(|()| fs::rename(&staging, &target).map_err(|e| Error::io(&target, e)));

    if written.is_err() {
        let _ = fs::remove_file(&staging);
    }
    written?;

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file atomically");
    Ok(())
}

// Kept in the target's directory so the rename never crosses filesystems.
fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

fn write_locked(staging: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(staging)
        .map_err(|e| Error::io(staging, e))?;

    let lock_failed = |_| Error::LockFailed {
        path: target.to_path_buf(),
    };
    file.lock_exclusive().map_err(lock_failed)?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| Error::io(staging, e))?;
    file.unlock().map_err(lock_failed)
}

/// Read a whole file as UTF-8.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read a whole file without assuming an encoding.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    fs::read(&native_path).map_err(|e| Error::io(&native_path, e))
}

pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Move `from` to `to`, replacing any existing file at `to`.
///
/// The source is renamed, never copied-then-deleted, so a failure leaves
/// the original in place.
pub fn move_file(from: &NormalizedPath, to: &NormalizedPath) -> Result<()> {
    let target = to.to_native();
    if target.is_file() {
        fs::remove_file(&target).map_err(|e| Error::io(&target, e))?;
    }

    fs::rename(from.to_native(), &target).map_err(|e| Error::io(from.to_native(), e))?;

    tracing::debug!(from = %from, to = %to, "Moved file");
    Ok(())
}
