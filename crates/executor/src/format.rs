//! Output formatting for the line protocol.
//!
//! Only query results produce output lines; ADD and DEL are silent.

use crate::{Error, Output};

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Ids separated by single spaces; empty result is an empty line
    #[default]
    Text,
    /// JSON array of ids
    Json,
}

/// Render an output as a protocol line.
///
/// Returns `None` for outputs that print nothing.
pub fn format_output(output: &Output, mode: OutputMode) -> Option<String> {
    match output {
        Output::Added(_) | Output::Deleted(_) => None,
        Output::Results(ids) => Some(match mode {
            OutputMode::Text => ids.join(" "),
            OutputMode::Json => {
                serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
            }
        }),
    }
}

/// Render an error for stderr.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Text => format!("(error) {}", err),
        OutputMode::Json => serde_json::json!({ "error": err.to_string() }).to_string(),
    }
}

/// Render an error for stderr, tagged with the input line it came from.
///
/// In JSON mode the line number is a field of the object, so every stderr
/// line is a complete JSON value.
pub fn format_line_error(line: usize, err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Text => format!("line {}: {}", line, format_error(err, mode)),
        OutputMode::Json => {
            serde_json::json!({ "line": line, "error": err.to_string() }).to_string()
        }
    }
}
