//! Bulk removal of embeddable files from the asset root.
//!
//! Removes every file the skip filter would let through to generation and
//! keeps the rest (sources, headers) along with all directories. Removal is
//! not transactional: the first failure aborts the run and files already
//! removed stay removed.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{PayloadError, PayloadResult};
use crate::filter::SkipFilter;
use crate::walk::discover;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: usize,
    pub kept: usize,
    /// Relative paths removed (or that would be, in dry-run mode), sorted.
    pub removed_paths: Vec<String>,
    pub dry_run: bool,
}

pub fn cleanup(root: &Path, filter: &SkipFilter, dry_run: bool) -> PayloadResult<CleanupReport> {
    let mut report = CleanupReport {
        dry_run,
        ..Default::default()
    };

    for file in discover(root)? {
        if filter.is_skipped(&file.relative) {
            report.kept += 1;
            continue;
        }
        if !dry_run {
            std::fs::remove_file(&file.path).map_err(|e| PayloadError::io(&file.path, e))?;
            debug!(path = %file.relative, "removed");
        }
        report.removed += 1;
        report.removed_paths.push(file.relative);
    }

    info!(
        root = %root.display(),
        removed = report.removed,
        kept = report.kept,
        dry_run,
        "cleanup finished"
    );
    Ok(report)
}
