//! Typeahead CLI: feed a command stream to the engine.
//!
//! ```text
//! typeahead [--config FILE] [--json] [--log-level LEVEL] [--stats] [INPUT]
//! ```
//!
//! Commands are read from INPUT, or stdin when omitted. Each QUERY/WQUERY
//! prints one line on stdout; errors go to stderr and make the exit code 1.

mod commands;
mod logging;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::process;
use std::time::Instant;

use anyhow::Context;
use clap::ArgMatches;
use tracing::info;
use typeahead_executor::{run_stream, Executor, OutputMode, StreamSummary, TypeaheadConfig};

use commands::build_cli;

fn main() {
    let matches = build_cli().get_matches();
    match run(&matches) {
        Ok(summary) if summary.is_clean() => {}
        Ok(_) => process::exit(1),
        Err(e) => {
            eprintln!("(error) {:#}", e);
            process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<StreamSummary> {
    let stats = matches.get_flag("stats");
    let env = std::env::var("RUST_LOG").ok();
    let directive = logging::filter_directive(
        matches.get_one::<String>("log-level").map(String::as_str),
        env.as_deref(),
        stats,
    );
    logging::init(&directive)?;

    let config = load_config(matches.get_one::<String>("config").map(Path::new))?;
    let executor = Executor::with_config(config);

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    let input: Box<dyn BufRead> = match matches.get_one::<String>("input") {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open input '{}'", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let started = Instant::now();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut err = io::stderr().lock();
    let summary = run_stream(&executor, input, &mut out, &mut err, mode)
        .context("failed to process command stream")?;

    if stats {
        let engine = executor.engine().stats();
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            commands = summary.commands,
            writes = summary.writes,
            queries = summary.queries,
            errors = summary.errors,
            items = engine.items,
            trie_nodes = engine.trie_nodes,
            "stream complete"
        );
    }
    Ok(summary)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<TypeaheadConfig> {
    match path {
        Some(path) => {
            let config = TypeaheadConfig::from_file(path)?;
            info!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(TypeaheadConfig::default()),
    }
}
