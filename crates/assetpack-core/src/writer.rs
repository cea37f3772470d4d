//! Atomic commit of the generated artifact.

use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{PayloadError, PayloadResult};

/// Replace `path` with `contents`, or leave it untouched on failure.
///
/// Writes to a temporary file in the destination directory and renames it
/// over the target only after the data has been flushed and synced.
pub fn write_atomic(path: &Path, contents: &[u8]) -> PayloadResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| PayloadError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PayloadError::io(dir, e))?;
    tmp.write_all(contents)
        .map_err(|e| PayloadError::io(tmp.path(), e))?;
    if let Some(perms) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(perms)
            .map_err(|e| PayloadError::io(tmp.path(), e))?;
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| PayloadError::io(tmp.path(), e))?;
    debug!(tmp = %tmp.path().display(), target = %path.display(), "renaming temp file");

    // On failure the temp file is removed when the returned handle drops.
    tmp.persist(path)
        .map_err(|e| PayloadError::io(path, e.error))?;
    Ok(())
}

/// Permissions the committed file should carry: those of the file being
/// replaced, or 0644 for a new one. Temp files are created 0600.
fn target_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// True if `path` exists and holds exactly `contents`.
pub fn is_up_to_date(path: &Path, contents: &[u8]) -> PayloadResult<bool> {
    match std::fs::read(path) {
        Ok(existing) => Ok(existing == contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(PayloadError::io(path, e)),
    }
}
