//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("typeahead")
        .about("In-memory typeahead engine driven by ADD/DEL/QUERY/WQUERY lines")
        .version(clap::crate_version!())
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Engine config file (typeahead.toml)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print each query result as a JSON array")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log filter for stderr, e.g. debug or typeahead_engine=trace (default: RUST_LOG or warn)"),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .help("Log elapsed time and command counts when the stream ends")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Command file to read (default: stdin)"),
        )
}
