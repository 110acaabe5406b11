//! Shared helper functions for CLI commands

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Pad a cell to a display width, IPA tokens included.
///
/// `format!("{:w$}")` pads by byte length, which misaligns multi-byte
/// tokens like "tʃ"; pad by character count instead.
pub fn pad_cell(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}
