//! Suffix-based skip predicate shared by generate and cleanup.

/// Skips files whose name ends in one of a fixed set of suffixes.
///
/// Generate never embeds a skipped file; cleanup never removes one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipFilter {
    suffixes: Vec<String>,
}

impl SkipFilter {
    pub fn new(suffixes: impl IntoIterator<Item = String>) -> Self {
        let mut suffixes: Vec<String> = suffixes.into_iter().collect();
        suffixes.sort();
        suffixes.dedup();
        Self { suffixes }
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// True if the file at `relative` must be skipped.
    ///
    /// Only the final path component is matched, so a directory named
    /// `foo.h/` does not hide the files inside it.
    pub fn is_skipped(&self, relative: &str) -> bool {
        let name = relative.rsplit('/').next().unwrap_or(relative);
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}
