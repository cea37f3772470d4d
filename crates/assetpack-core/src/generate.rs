//! Payload generation pipeline: walk, filter, name, render, commit.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::PayloadConfig;
use crate::error::{PayloadError, PayloadResult};
use crate::ident::IdentifierTable;
use crate::manifest::{HeaderEmitter, Manifest, PayloadEntry};
use crate::walk::{discover, SourcePath};
use crate::writer::{is_up_to_date, write_atomic};

/// A surviving file with its assigned identifier. Contents are not read yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub source: SourcePath,
    pub identifier: String,
}

/// Result of selecting and naming files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub files: Vec<PlannedFile>,
    pub skipped: Vec<String>,
}

/// Rendered header text plus the manifest it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPayload {
    pub text: String,
    pub manifest: Manifest,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub files: usize,
    pub skipped: usize,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate { files: usize },
    Stale { output: PathBuf },
}

/// Discover, filter and assign identifiers.
///
/// Fails with `DuplicateIdentifier` before any file content is read.
pub fn plan(config: &PayloadConfig) -> PayloadResult<Plan> {
    config.validate()?;
    let filter = config.skip_filter();
    let output = OutputGuard::new(&config.output);

    let mut table = IdentifierTable::new(&config.prefix);
    let mut plan = Plan::default();
    for source in discover(&config.root)? {
        if filter.is_skipped(&source.relative) || output.is_output(&source.path) {
            debug!(path = %source.relative, "skipping");
            plan.skipped.push(source.relative);
            continue;
        }
        let identifier = table.assign(&source.relative)?;
        plan.files.push(PlannedFile { source, identifier });
    }
    debug!(
        files = table.len(),
        skipped = plan.skipped.len(),
        suffixes = ?filter.suffixes(),
        "planned payload"
    );
    Ok(plan)
}

/// Render the header for `config` without touching the output path.
pub fn render(config: &PayloadConfig) -> PayloadResult<GeneratedPayload> {
    let plan = plan(config)?;
    let mut emitter = HeaderEmitter::new(&config.prefix, config.row_width);
    for file in plan.files {
        let data = std::fs::read(&file.source.path)
            .map_err(|e| PayloadError::io(&file.source.path, e))?;
        emitter.push(PayloadEntry {
            identifier: file.identifier,
            path: file.source.relative,
            data,
        });
    }
    let (text, manifest) = emitter.finish();
    Ok(GeneratedPayload {
        text,
        manifest,
        skipped: plan.skipped.len(),
    })
}

/// Regenerate the header and commit it atomically.
pub fn generate(config: &PayloadConfig) -> PayloadResult<GenerateReport> {
    let payload = render(config)?;
    write_atomic(&config.output, payload.text.as_bytes())?;

    let report = GenerateReport {
        output: config.output.clone(),
        files: payload.manifest.len(),
        skipped: payload.skipped,
        bytes: payload.manifest.total_bytes(),
    };
    info!(
        root = %config.root.display(),
        output = %report.output.display(),
        files = report.files,
        skipped = report.skipped,
        bytes = report.bytes,
        "wrote payload header"
    );
    Ok(report)
}

/// Compare a fresh render against the existing artifact without writing.
pub fn check(config: &PayloadConfig) -> PayloadResult<CheckOutcome> {
    let payload = render(config)?;
    if is_up_to_date(&config.output, payload.text.as_bytes())? {
        Ok(CheckOutcome::UpToDate {
            files: payload.manifest.len(),
        })
    } else {
        Ok(CheckOutcome::Stale {
            output: config.output.clone(),
        })
    }
}

/// Recognises the output file when it lives inside the root.
struct OutputGuard {
    name: Option<std::ffi::OsString>,
    canonical: Option<PathBuf>,
}

impl OutputGuard {
    fn new(output: &Path) -> Self {
        Self {
            name: output.file_name().map(|n| n.to_os_string()),
            canonical: output.canonicalize().ok(),
        }
    }

    fn is_output(&self, path: &Path) -> bool {
        let (Some(name), Some(canonical)) = (&self.name, &self.canonical) else {
            return false;
        };
        if path.file_name() != Some(name.as_os_str()) {
            return false;
        }
        path.canonicalize().map(|p| &p == canonical).unwrap_or(false)
    }
}
