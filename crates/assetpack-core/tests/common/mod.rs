#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Decode the bytes of `static const uint8_t <identifier>[]` from header text.
///
/// A zero-length file is emitted as a single padding byte and decodes to
/// an empty vector.
pub fn decode_array(header: &str, identifier: &str) -> Option<Vec<u8>> {
    if header.contains(&format!("static const uint8_t {identifier}[1] = {{0x00}};")) {
        return Some(Vec::new());
    }
    let start_marker = format!("static const uint8_t {identifier}[] = {{");
    let start = header.find(&start_marker)? + start_marker.len();
    let end = start + header[start..].find("};")?;
    let body = &header[start..end];

    let mut bytes = Vec::new();
    for token in body.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let hex = token.strip_prefix("0x")?;
        bytes.push(u8::from_str_radix(hex, 16).ok()?);
    }
    Some(bytes)
}

/// Extract `{"path", ident, size}` rows from the manifest table.
pub fn manifest_rows(header: &str) -> Vec<(String, String, usize)> {
    let Some(start) = header.find("_files[] = {") else {
        return Vec::new();
    };
    let table = &header[start..];
    let end = table.find("};").unwrap_or(table.len());
    table[..end]
        .lines()
        .skip(1)
        .filter_map(|line| {
            let line = line.trim().strip_prefix('{')?.strip_suffix("},")?;
            let mut parts = line.rsplitn(3, ", ");
            let size = parts.next()?.parse().ok()?;
            let ident = parts.next()?.to_string();
            let path = parts.next()?.trim_matches('"').to_string();
            Some((path, ident, size))
        })
        .collect()
}

pub fn write_file(root: &Path, rel: &str, data: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, data).unwrap();
}
