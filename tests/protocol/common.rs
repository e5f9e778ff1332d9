//! Shared helpers for protocol tests

use typeahead::{parse_command, run_stream, Executor, Output, OutputMode, StreamSummary};

/// Run a script through a fresh executor, returning (stdout, stderr, summary)
pub fn run_script(script: &str) -> (String, String, StreamSummary) {
    run_script_with(&Executor::ephemeral(), script)
}

/// Run a script through the given executor
#[allow(dead_code)]
pub fn run_script_with(executor: &Executor, script: &str) -> (String, String, StreamSummary) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let summary = run_stream(
        executor,
        script.as_bytes(),
        &mut out,
        &mut err,
        OutputMode::Text,
    )
    .unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
        summary,
    )
}

/// Execute one protocol line and return the result ids
pub fn query(executor: &Executor, line: &str) -> Vec<String> {
    match executor.execute(parse_command(line).unwrap()).unwrap() {
        Output::Results(ids) => ids,
        other => panic!("Expected Output::Results, got {:?}", other),
    }
}

/// Execute protocol lines, panicking on any error
pub fn apply(executor: &Executor, lines: &[&str]) {
    for line in lines {
        executor
            .execute(parse_command(line).unwrap())
            .unwrap_or_else(|e| panic!("{} failed: {}", line, e));
    }
}
