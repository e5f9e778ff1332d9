//! Line-by-line processing of a command stream.
//!
//! Framing rules:
//! - Blank lines and lines starting with `#` are skipped.
//! - If the first remaining line is a bare non-negative integer N, it is a
//!   command count: only the next N commands are processed.
//! - A malformed line is reported on the error sink and processing
//!   continues with the next line.
//!
//! Commands are applied strictly in order, so every query sees the effect
//! of every mutation before it.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::format::{format_line_error, format_output, OutputMode};
use crate::{parse_command, Executor};

/// Counters for one processed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Command lines seen (including malformed ones)
    pub commands: usize,
    /// ADD/DEL commands applied
    pub writes: usize,
    /// QUERY/WQUERY commands answered
    pub queries: usize,
    /// Lines that failed to parse or execute
    pub errors: usize,
}

impl StreamSummary {
    /// True if every line was processed without error
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }
}

/// Run every command in `input`, writing query results to `out` and
/// errors to `err`.
///
/// # Errors
///
/// Only I/O errors on the reader or writers are returned; command errors
/// are reported on `err` and counted in the summary.
pub fn run_stream<R, W, E>(
    executor: &Executor,
    input: R,
    out: &mut W,
    err: &mut E,
    mode: OutputMode,
) -> io::Result<StreamSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = StreamSummary::default();
    let mut limit: Option<usize> = None;
    let mut first = true;

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if first {
            first = false;
            if let Ok(n) = trimmed.parse::<usize>() {
                debug!(count = n, "command count header");
                limit = Some(n);
                continue;
            }
        }
        if limit.is_some_and(|n| summary.commands >= n) {
            debug!(line = index + 1, "command count reached, ignoring rest of input");
            break;
        }
        summary.commands += 1;

        let result = parse_command(trimmed).and_then(|cmd| {
            if cmd.is_write() {
                summary.writes += 1;
            } else {
                summary.queries += 1;
            }
            executor.execute(cmd)
        });

        match result {
            Ok(output) => {
                if let Some(text) = format_output(&output, mode) {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(e) => {
                summary.errors += 1;
                warn!(line = index + 1, error = %e, "command failed");
                writeln!(err, "{}", format_line_error(index + 1, &e, mode))?;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}
