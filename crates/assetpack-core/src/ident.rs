//! Symbol names for embedded files.

use std::collections::BTreeMap;

use crate::error::{PayloadError, PayloadResult};

/// Placeholder "source path" reported when a file collides with one of the
/// header's own symbols.
pub const GENERATED_SYMBOL_OWNER: &str = "<generated header symbol>";

/// True if `s` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Map a relative path to `<prefix>_<name>`.
///
/// Separators, dots and hyphens become underscores, as does every other
/// character outside `[A-Za-z0-9_]`. The mapping is not injective: callers
/// must go through [`IdentifierTable`] to catch collisions.
pub fn sanitize_identifier(prefix: &str, relative: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + 1 + relative.len());
    out.push_str(prefix);
    out.push('_');
    for c in relative.chars() {
        match c {
            '/' | '.' | '-' => out.push('_'),
            c if c.is_ascii_alphanumeric() || c == '_' => out.push(c),
            _ => out.push('_'),
        }
    }
    out
}

/// Names the header declares itself, independent of any input file.
pub fn reserved_symbols(prefix: &str) -> [String; 3] {
    [
        format!("{prefix}_file_t"),
        format!("{prefix}_files"),
        format!("{prefix}_file_count"),
    ]
}

/// Assigns identifiers and rejects any second path that maps to a name
/// already taken.
#[derive(Debug)]
pub struct IdentifierTable {
    prefix: String,
    owners: BTreeMap<String, String>,
}

impl IdentifierTable {
    pub fn new(prefix: &str) -> Self {
        let owners = reserved_symbols(prefix)
            .into_iter()
            .map(|sym| (sym, GENERATED_SYMBOL_OWNER.to_string()))
            .collect();
        Self {
            prefix: prefix.to_string(),
            owners,
        }
    }

    /// Sanitize `relative` and claim the resulting identifier.
    pub fn assign(&mut self, relative: &str) -> PayloadResult<String> {
        let identifier = sanitize_identifier(&self.prefix, relative);
        if let Some(first) = self.owners.get(&identifier) {
            return Err(PayloadError::DuplicateIdentifier {
                identifier,
                first: first.clone(),
                second: relative.to_string(),
            });
        }
        self.owners.insert(identifier.clone(), relative.to_string());
        Ok(identifier)
    }

    /// Number of file identifiers assigned so far.
    pub fn len(&self) -> usize {
        self.owners
            .values()
            .filter(|owner| owner.as_str() != GENERATED_SYMBOL_OWNER)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
