//! Payload entries, the manifest table, and header emission.

use crate::serialize::{c_string_literal, render_byte_array};

/// First line of every generated header.
pub const GENERATED_BANNER: &str = "// Generated by assetpack. Do not edit.";

/// One embedded file: its symbol, relative path and contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadEntry {
    pub identifier: String,
    pub path: String,
    pub data: Vec<u8>,
}

impl PayloadEntry {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// A manifest row. File contents are not retained once rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    pub identifier: String,
    pub path: String,
    pub size: usize,
}

/// Ordered table of every embedded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    records: Vec<ManifestRecord>,
}

impl Manifest {
    pub fn records(&self) -> &[ManifestRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all embedded file sizes.
    pub fn total_bytes(&self) -> u64 {
        self.records.iter().map(|r| r.size as u64).sum()
    }
}

/// Incrementally builds the header text.
///
/// Entries must be pushed in manifest order; each entry's bytes are rendered
/// immediately and then dropped.
#[derive(Debug)]
pub struct HeaderEmitter {
    prefix: String,
    row_width: usize,
    text: String,
    manifest: Manifest,
}

impl HeaderEmitter {
    pub fn new(prefix: &str, row_width: usize) -> Self {
        let mut text = String::new();
        text.push_str(GENERATED_BANNER);
        text.push('\n');
        text.push_str("#pragma once\n");
        text.push_str("#include <stddef.h>\n");
        text.push_str("#include <stdint.h>\n\n");
        text.push_str("typedef struct {\n");
        text.push_str("    const char *path;\n");
        text.push_str("    const uint8_t *data;\n");
        text.push_str("    size_t size;\n");
        text.push_str(&format!("}} {prefix}_file_t;\n\n"));
        Self {
            prefix: prefix.to_string(),
            row_width,
            text,
            manifest: Manifest::default(),
        }
    }

    pub fn push(&mut self, entry: PayloadEntry) {
        render_byte_array(&mut self.text, &entry.identifier, &entry.data, self.row_width);
        self.text.push('\n');
        self.manifest.records.push(ManifestRecord {
            size: entry.size(),
            identifier: entry.identifier,
            path: entry.path,
        });
    }

    /// Append the manifest table and count, returning the full header text.
    ///
    /// An empty table is emitted as `= {}`, which needs GNU C/C++
    /// zero-length array support.
    pub fn finish(mut self) -> (String, Manifest) {
        let prefix = &self.prefix;
        let records = &self.manifest.records;
        if records.is_empty() {
            self.text
                .push_str(&format!("static const {prefix}_file_t {prefix}_files[] = {{}};\n"));
        } else {
            self.text
                .push_str(&format!("static const {prefix}_file_t {prefix}_files[] = {{\n"));
            for r in records {
                self.text.push_str(&format!(
                    "    {{{}, {}, {}}},\n",
                    c_string_literal(&r.path),
                    r.identifier,
                    r.size
                ));
            }
            self.text.push_str("};\n");
        }
        self.text.push('\n');
        self.text.push_str(&format!(
            "static const size_t {prefix}_file_count = {};\n",
            records.len()
        ));
        (self.text, self.manifest)
    }
}

/// Render a complete header from entries already in manifest order.
pub fn render_header(
    prefix: &str,
    row_width: usize,
    entries: impl IntoIterator<Item = PayloadEntry>,
) -> (String, Manifest) {
    let mut emitter = HeaderEmitter::new(prefix, row_width);
    for entry in entries {
        emitter.push(entry);
    }
    emitter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(identifier: &str, path: &str, data: &[u8]) -> PayloadEntry {
        PayloadEntry {
            identifier: identifier.into(),
            path: path.into(),
            data: data.to_vec(),
        }
    }

    #[test]
    fn test_single_entry_header() {
        let (text, manifest) = render_header(
            "upload",
            12,
            vec![entry("upload_icon_png", "icon.png", &[1, 2, 3])],
        );
        let expected = "\
// Generated by assetpack. Do not edit.
#pragma once
#include <stddef.h>
#include <stdint.h>

typedef struct {
    const char *path;
    const uint8_t *data;
    size_t size;
} upload_file_t;

static const uint8_t upload_icon_png[] = {
    0x01, 0x02, 0x03,
};

static const upload_file_t upload_files[] = {
    {\"icon.png\", upload_icon_png, 3},
};

static const size_t upload_file_count = 1;
";
        assert_eq!(text, expected);
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.total_bytes(), 3);
    }

    #[test]
    fn test_empty_manifest_is_explicit() {
        let (text, manifest) = render_header("upload", 12, Vec::new());
        assert!(text.contains("static const upload_file_t upload_files[] = {};\n"));
        assert!(text.ends_with("static const size_t upload_file_count = 0;\n"));
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_zero_length_entry_gets_explicit_size() {
        let (text, manifest) =
            render_header("upload", 12, vec![entry("upload_empty", "empty", &[])]);
        assert!(text.contains("static const uint8_t upload_empty[1] = {0x00};\n"));
        assert!(text.contains("    {\"empty\", upload_empty, 0},\n"));
        assert_eq!(manifest.records()[0].size, 0);
    }

    #[test]
    fn test_records_keep_push_order() {
        let (_, manifest) = render_header(
            "fs",
            4,
            vec![
                entry("fs_a", "a", b"1"),
                entry("fs_b_c", "b/c", b"22"),
            ],
        );
        let paths: Vec<&str> = manifest.records().iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["a", "b/c"]);
        assert_eq!(manifest.total_bytes(), 3);
    }

    #[test]
    fn test_prefix_applies_to_generated_symbols() {
        let (text, _) = render_header("fs", 12, Vec::new());
        assert!(text.contains("} fs_file_t;"));
        assert!(text.contains("static const fs_file_t fs_files[] = {};"));
        assert!(text.contains("static const size_t fs_file_count = 0;"));
    }

    #[test]
    fn test_path_is_escaped_in_table() {
        let (text, _) = render_header("upload", 12, vec![entry("upload_q", "q\"", b"x")]);
        assert!(text.contains("{\"q\\\"\", upload_q, 1},"));
    }
}
