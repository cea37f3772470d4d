//! Byte-array and string literal rendering.

const HEX: &[u8; 16] = b"0123456789abcdef";
const INDENT: &str = "    ";

/// Append one `static const uint8_t <identifier>[]` definition to `out`.
///
/// Bytes are written as lowercase `0xNN` literals, `row_width` per row, every
/// row terminated by a comma. Empty input renders as a one-byte `{0x00}`
/// array since zero-size arrays are not ISO C/C++; the manifest still records
/// size 0 for it.
pub fn render_byte_array(out: &mut String, identifier: &str, data: &[u8], row_width: usize) {
    out.push_str("static const uint8_t ");
    out.push_str(identifier);
    if data.is_empty() {
        out.push_str("[1] = {0x00};\n");
        return;
    }
    out.push_str("[] = {\n");
    for row in data.chunks(row_width.max(1)) {
        out.push_str(INDENT);
        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            push_hex_byte(out, *byte);
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("};\n");
}

fn push_hex_byte(out: &mut String, byte: u8) {
    out.push_str("0x");
    out.push(HEX[(byte >> 4) as usize] as char);
    out.push(HEX[(byte & 0x0f) as usize] as char);
}

/// Quote `s` as a C string literal.
pub fn c_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Octal escapes are at most three digits, so following
            // characters cannot be absorbed into them.
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            // Break "??" so trigraph-aware compilers leave it alone.
            '?' if out.ends_with('?') => out.push_str("\\?"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
