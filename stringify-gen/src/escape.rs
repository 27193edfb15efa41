//! C string-literal escaping.

/// Escape a raw source line for a C string literal.
///
/// Backslashes are doubled before quotes are escaped; the reverse order
/// would corrupt lines already containing `\"`.
pub fn escape_line(line: &str) -> String {
    line.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Frame an escaped line as one fragment of the generated array: quoted,
/// newline-escaped, and continued onto the next output line.
pub fn string_literal(line: &str) -> String {
    format!("\"{} \\n\"\\", escape_line(line))
}
