//! stderr logging setup.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `--log-level` nor `RUST_LOG` is given.
const DEFAULT_FILTER: &str = "warn";

/// Pick the log filter directive.
///
/// `--log-level` wins over `RUST_LOG`. With `--stats` the CLI's own
/// target is raised to info so the run summary is visible.
pub fn filter_directive(flag: Option<&str>, env: Option<&str>, stats: bool) -> String {
    let base = flag
        .or(env)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER);
    if stats {
        format!("{},typeahead_cli=info", base)
    } else {
        base.to_string()
    }
}

/// Install the global subscriber writing to stderr.
pub fn init(directive: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| anyhow::anyhow!("invalid log filter '{}': {}", directive, e))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}
