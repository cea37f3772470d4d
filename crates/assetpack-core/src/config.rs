//! Explicit run configuration.
//!
//! Every operation takes a [`PayloadConfig`] instead of reading fixed paths,
//! so a run can target any directory tree (including temporary ones in tests).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PayloadError, PayloadResult};
use crate::filter::SkipFilter;
use crate::ident::is_identifier;

/// Suffixes of compiled-source and header files that are never embedded.
pub const DEFAULT_SKIP_SUFFIXES: &[&str] = &[".cpp", ".h"];

/// Namespace prefix for every generated symbol.
pub const DEFAULT_PREFIX: &str = "upload";

/// Bytes per row in a rendered array initializer.
pub const DEFAULT_ROW_WIDTH: usize = 12;

/// Fully resolved configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub skip_suffixes: Vec<String>,
    pub prefix: String,
    pub row_width: usize,
}

impl PayloadConfig {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: output.into(),
            skip_suffixes: DEFAULT_SKIP_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            prefix: DEFAULT_PREFIX.to_string(),
            row_width: DEFAULT_ROW_WIDTH,
        }
    }

    pub fn with_skip_suffixes(mut self, suffixes: impl IntoIterator<Item = String>) -> Self {
        self.skip_suffixes = suffixes.into_iter().collect();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_row_width(mut self, row_width: usize) -> Self {
        self.row_width = row_width;
        self
    }

    pub fn skip_filter(&self) -> SkipFilter {
        SkipFilter::new(self.skip_suffixes.iter().cloned())
    }

    pub fn validate(&self) -> PayloadResult<()> {
        if !is_identifier(&self.prefix) {
            return Err(PayloadError::InvalidConfig {
                message: format!(
                    "prefix '{}' is not a legal identifier ([A-Za-z_][A-Za-z0-9_]*)",
                    self.prefix
                ),
            });
        }
        if self.row_width == 0 {
            return Err(PayloadError::InvalidConfig {
                message: "row_width must be at least 1".to_string(),
            });
        }
        validate_skip_suffixes(&self.skip_suffixes)
    }
}

/// Configuration for the cleanup utility: the same root and skip set as
/// generation, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupConfig {
    pub root: PathBuf,
    pub skip_suffixes: Vec<String>,
}

impl CleanupConfig {
    pub fn skip_filter(&self) -> SkipFilter {
        SkipFilter::new(self.skip_suffixes.iter().cloned())
    }
}

fn validate_skip_suffixes(suffixes: &[String]) -> PayloadResult<()> {
    if suffixes.iter().any(|s| s.is_empty()) {
        return Err(PayloadError::InvalidConfig {
            message: "skip_suffixes must not contain an empty suffix".to_string(),
        });
    }
    Ok(())
}

/// On-disk YAML config. Every key is optional; CLI flags take precedence.
///
/// ```yaml
/// root: upload
/// output: src/filesystem/upload/upload_payload.h
/// skip_suffixes: [".cpp", ".h"]
/// prefix: upload
/// row_width: 12
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub skip_suffixes: Option<Vec<String>>,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub row_width: Option<usize>,
}

impl FileConfig {
    /// Load a config file. Relative `root`/`output` resolve against the
    /// file's own directory.
    pub fn load(path: &Path) -> PayloadResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| PayloadError::io(path, e))?;
        let mut cfg = Self::parse(&text).map_err(|source| PayloadError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        cfg.root = cfg.root.map(|p| resolve_against(base, p));
        cfg.output = cfg.output.map(|p| resolve_against(base, p));
        Ok(cfg)
    }

    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }
}

fn resolve_against(base: &Path, p: PathBuf) -> PathBuf {
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}

/// Explicit overrides, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub skip_suffixes: Option<Vec<String>>,
    pub prefix: Option<String>,
    pub row_width: Option<usize>,
}

/// Merge file values and overrides into a validated config.
///
/// `root` and `output` must come from one of the two sources.
pub fn resolve_config(
    file: Option<FileConfig>,
    overrides: ConfigOverrides,
) -> PayloadResult<PayloadConfig> {
    let file = file.unwrap_or_default();

    let root = resolve_root(overrides.root, file.root)?;
    let output = overrides
        .output
        .or(file.output)
        .ok_or_else(|| PayloadError::InvalidConfig {
            message: "no output path given (use --output or `output:` in the config file)"
                .to_string(),
        })?;

    let mut cfg = PayloadConfig::new(root, output)
        .with_skip_suffixes(resolve_skip_suffixes(overrides.skip_suffixes, file.skip_suffixes));
    if let Some(prefix) = overrides.prefix.or(file.prefix) {
        cfg = cfg.with_prefix(prefix);
    }
    if let Some(width) = overrides.row_width.or(file.row_width) {
        cfg = cfg.with_row_width(width);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// Merge file values and overrides into a validated cleanup config.
///
/// Uses the same root and skip-suffix resolution as [`resolve_config`];
/// output, prefix and row width are ignored.
pub fn resolve_cleanup_config(
    file: Option<FileConfig>,
    overrides: ConfigOverrides,
) -> PayloadResult<CleanupConfig> {
    let file = file.unwrap_or_default();
    let cfg = CleanupConfig {
        root: resolve_root(overrides.root, file.root)?,
        skip_suffixes: resolve_skip_suffixes(overrides.skip_suffixes, file.skip_suffixes),
    };
    validate_skip_suffixes(&cfg.skip_suffixes)?;
    Ok(cfg)
}

fn resolve_root(cli: Option<PathBuf>, file: Option<PathBuf>) -> PayloadResult<PathBuf> {
    cli.or(file).ok_or_else(|| PayloadError::InvalidConfig {
        message: "no root directory given (use --root or `root:` in the config file)"
            .to_string(),
    })
}

fn resolve_skip_suffixes(cli: Option<Vec<String>>, file: Option<Vec<String>>) -> Vec<String> {
    cli.or(file)
        .unwrap_or_else(|| DEFAULT_SKIP_SUFFIXES.iter().map(|s| s.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PayloadConfig::new("upload", "out.h");
        assert_eq!(cfg.skip_suffixes, vec![".cpp".to_string(), ".h".to_string()]);
        assert_eq!(cfg.prefix, "upload");
        assert_eq!(cfg.row_width, 12);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let err = PayloadConfig::new("a", "b")
            .with_prefix("9lives")
            .validate()
            .unwrap_err();
        assert!(matches!(err, PayloadError::InvalidConfig { .. }));

        assert!(PayloadConfig::new("a", "b").with_prefix("").validate().is_err());
        assert!(PayloadConfig::new("a", "b").with_prefix("my-fs").validate().is_err());
    }

    #[test]
    fn test_zero_row_width_rejected() {
        assert!(PayloadConfig::new("a", "b").with_row_width(0).validate().is_err());
    }

    #[test]
    fn test_empty_suffix_rejected() {
        let cfg = PayloadConfig::new("a", "b").with_skip_suffixes(vec![String::new()]);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_parse_file_config() {
        let cfg = FileConfig::parse(
            r#"
root: assets
output: gen/payload.h
skip_suffixes: [".cpp", ".h", ".hpp"]
prefix: fs
row_width: 16
"#,
        )
        .unwrap();
        assert_eq!(cfg.root, Some(PathBuf::from("assets")));
        assert_eq!(cfg.skip_suffixes.as_ref().map(Vec::len), Some(3));
        assert_eq!(cfg.prefix.as_deref(), Some("fs"));
        assert_eq!(cfg.row_width, Some(16));
    }

    #[test]
    fn test_parse_empty_file_config() {
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FileConfig::parse("rooot: x\n").is_err());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assetpack.yaml");
        std::fs::write(&path, "root: upload\noutput: /abs/out.h\n").unwrap();

        let cfg = FileConfig::load(&path).unwrap();
        assert_eq!(cfg.root, Some(dir.path().join("upload")));
        assert_eq!(cfg.output, Some(PathBuf::from("/abs/out.h")));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = FileConfig {
            root: Some("from_file".into()),
            output: Some("file.h".into()),
            prefix: Some("file".into()),
            ..Default::default()
        };
        let overrides = ConfigOverrides {
            root: Some("from_cli".into()),
            row_width: Some(8),
            ..Default::default()
        };
        let cfg = resolve_config(Some(file), overrides).unwrap();
        assert_eq!(cfg.root, PathBuf::from("from_cli"));
        assert_eq!(cfg.output, PathBuf::from("file.h"));
        assert_eq!(cfg.prefix, "file");
        assert_eq!(cfg.row_width, 8);
    }

    #[test]
    fn test_cleanup_config_shares_root_and_suffix_resolution() {
        let file = FileConfig {
            root: Some("from_file".into()),
            skip_suffixes: Some(vec![".md".into()]),
            ..Default::default()
        };
        let cfg = resolve_cleanup_config(Some(file.clone()), ConfigOverrides::default()).unwrap();
        assert_eq!(cfg.root, PathBuf::from("from_file"));
        assert_eq!(cfg.skip_suffixes, vec![".md".to_string()]);
        assert!(cfg.skip_filter().is_skipped("notes.md"));

        let overrides = ConfigOverrides {
            root: Some("from_cli".into()),
            skip_suffixes: Some(vec![".cpp".into()]),
            ..Default::default()
        };
        let cfg = resolve_cleanup_config(Some(file), overrides).unwrap();
        assert_eq!(cfg.root, PathBuf::from("from_cli"));
        assert_eq!(cfg.skip_suffixes, vec![".cpp".to_string()]);
    }

    #[test]
    fn test_cleanup_config_defaults_and_errors() {
        let overrides = ConfigOverrides {
            root: Some("r".into()),
            ..Default::default()
        };
        let cfg = resolve_cleanup_config(None, overrides).unwrap();
        assert_eq!(cfg.skip_suffixes, vec![".cpp".to_string(), ".h".to_string()]);

        let err = resolve_cleanup_config(None, ConfigOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("no root directory given"));

        let overrides = ConfigOverrides {
            root: Some("r".into()),
            skip_suffixes: Some(vec![String::new()]),
            ..Default::default()
        };
        assert!(matches!(
            resolve_cleanup_config(None, overrides).unwrap_err(),
            PayloadError::InvalidConfig { .. }
        ));
    }

    #[test]
    fn test_missing_output_is_config_error() {
        let overrides = ConfigOverrides {
            root: Some("r".into()),
            ..Default::default()
        };
        let err = resolve_config(None, overrides).unwrap_err();
        assert!(err.to_string().contains("output"));
    }
}
