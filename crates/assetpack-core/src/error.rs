//! Error types for payload generation and cleanup.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for payload operations.
pub type PayloadResult<T> = Result<T, PayloadError>;

/// Errors that abort a generate or cleanup run.
///
/// Every variant is fatal: nothing is committed to the output path once one
/// of these has been returned.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Root directory is absent or not a directory.
    #[error("upload dir not found: {}", root.display())]
    MissingRoot { root: PathBuf },

    /// Two distinct relative paths sanitize to the same symbol.
    #[error(
        "duplicate identifier '{identifier}': '{first}' and '{second}' both map to it"
    )]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    /// Read, write, rename or remove failed on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered path cannot be rendered into the text artifact.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    /// Configuration values failed validation.
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    /// Config file could not be parsed.
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl PayloadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true if this error is an identifier collision.
    ///
    /// Collisions are reported separately from I/O failures because emitting
    /// output anyway would produce two definitions with the same name.
    pub fn is_duplicate_identifier(&self) -> bool {
        matches!(self, Self::DuplicateIdentifier { .. })
    }

    /// Returns true if the root directory was missing.
    pub fn is_missing_root(&self) -> bool {
        matches!(self, Self::MissingRoot { .. })
    }

    /// Suggested exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_identifier_names_both_paths() {
        let err = PayloadError::DuplicateIdentifier {
            identifier: "upload_a_b".into(),
            first: "a-b".into(),
            second: "a.b".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("upload_a_b"));
        assert!(msg.contains("'a-b'"));
        assert!(msg.contains("'a.b'"));
        assert!(err.is_duplicate_identifier());
        assert!(!err.is_missing_root());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = PayloadError::io(
            "/tmp/x/icon.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/x/icon.png"));
        assert_eq!(err.exit_code(), 1);
    }
}
