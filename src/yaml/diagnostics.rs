//! YAML error diagnostics with source spans
//!
//! Worksheets are hand-edited by clinicians, so parse failures point at
//! the offending line instead of dumping a raw serde error.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// YAML syntax error with source location
#[derive(Debug, Error, Diagnostic)]
#[error("worksheet YAML syntax error")]
#[diagnostic(code(artic::yaml::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    /// The underlying error message
    message: String,
}

impl YamlSyntaxError {
    /// Create a syntax error from a serde_yml error
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));

        let offset = line_col_to_offset(source, line, column);
        let message = err.to_string();
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            message,
        }
    }
}

/// Convert line/column to byte offset
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    let mut current_line = 1;

    for (i, ch) in source.char_indices() {
        if current_line == line {
            let line_start = i;
            let mut col = 1;
            for (j, c) in source[line_start..].char_indices() {
                if col == column {
                    return line_start + j;
                }
                if c == '\n' {
                    break;
                }
                col += 1;
            }
            return line_start + column.saturating_sub(1);
        }
        if ch == '\n' {
            current_line += 1;
        }
        offset = i;
    }

    offset
}

/// Generate helpful suggestions based on error message
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if msg_lower.contains("duplicate key") {
        return Some(
            "Each field can only appear once per row. Remove the duplicate field.".to_string(),
        );
    }

    if msg_lower.contains("expected block end") {
        return Some("Check your indentation - it may be inconsistent.".to_string());
    }

    if msg_lower.contains("mapping values are not allowed") {
        return Some(
            "You may be missing a space after ':' or have incorrect indentation.".to_string(),
        );
    }

    if msg_lower.contains("unknown field") {
        return Some(
            "Worksheet rows take exactly: sound, position, produced. \
             Edit only the produced values."
                .to_string(),
        );
    }

    if msg_lower.contains("unknown variant") {
        return Some("Position must be one of: initial, medial, final.".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_points_into_line() {
        let source = "child_name: Alex\nage: 4;6\nrows:\n";
        let offset = line_col_to_offset(source, 2, 1);
        assert_eq!(&source[offset..offset + 3], "age");
    }

    #[test]
    fn test_help_for_unknown_variant() {
        let help = generate_help("unknown variant `middle`").unwrap();
        assert!(help.contains("initial, medial, final"));
    }

    #[test]
    fn test_no_help_for_unrecognized_message() {
        assert!(generate_help("something else entirely").is_none());
    }
}
