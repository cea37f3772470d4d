//! Recursive file discovery under a root directory.

use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{PayloadError, PayloadResult};

/// A regular file found under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePath {
    /// Location on disk (root joined with the relative path).
    pub path: PathBuf,
    /// Root-relative path, always `/`-separated.
    pub relative: String,
}

/// Enumerate every regular file reachable under `root`.
///
/// The result is sorted by relative path so that downstream identifier
/// assignment and emission never depend on directory enumeration order.
pub fn discover(root: &Path) -> PayloadResult<Vec<SourcePath>> {
    if !root.is_dir() {
        return Err(PayloadError::MissingRoot {
            root: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !is_regular_file(&entry) {
            continue;
        }
        let relative = relative_path(root, entry.path())?;
        files.push(SourcePath {
            path: entry.into_path(),
            relative,
        });
    }

    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    debug!(root = %root.display(), files = files.len(), "discovered files");
    Ok(files)
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    if ft.is_file() {
        return true;
    }
    // Directory symlinks are not descended into; file symlinks count as files.
    ft.is_symlink() && entry.path().is_file()
}

/// Root-relative path with forward-slash separators on every host.
pub fn relative_path(root: &Path, path: &Path) -> PayloadResult<String> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut parts = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| PayloadError::NonUtf8Path {
                path: path.to_path_buf(),
            })?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}

fn walk_error(root: &Path, err: walkdir::Error) -> PayloadError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other(message));
    PayloadError::io(path, source)
}
