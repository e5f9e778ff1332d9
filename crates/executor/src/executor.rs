//! The Executor - single entry point to the typeahead engine.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! engine and converts results to outputs.

use std::sync::Arc;

use tracing::debug;
use typeahead_engine::{Engine, TypeaheadConfig};

use crate::{Command, Output, Result};

/// The command executor - single entry point to the typeahead engine.
///
/// The Executor is **stateless**: it holds a reference to the engine but
/// maintains no state of its own. All state lives in the engine.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across threads. Queries run
/// concurrently; ADD/DEL are serialized by the engine's write lock.
///
/// # Example
///
/// ```ignore
/// use typeahead_executor::{Command, Executor, ItemType};
///
/// let executor = Executor::ephemeral();
///
/// executor.execute(Command::Add {
///     item_type: ItemType::User,
///     id: "u1".into(),
///     score: 10.0,
///     content: "hello world".into(),
/// })?;
///
/// let results = executor.execute_many(vec![
///     Command::Query { k: 5, query: "hel".into() },
///     Command::Del { id: "u1".into() },
/// ]);
/// ```
#[derive(Clone)]
pub struct Executor {
    engine: Arc<Engine>,
}

impl Executor {
    /// Create a new executor wrapping an engine.
    pub fn new(engine: Arc<Engine>) -> Self {
        Self { engine }
    }

    /// Create an executor over a fresh engine with default configuration.
    pub fn ephemeral() -> Self {
        Self::new(Arc::new(Engine::new()))
    }

    /// Create an executor over a fresh engine with the given configuration.
    pub fn with_config(config: TypeaheadConfig) -> Self {
        Self::new(Arc::new(Engine::with_config(config)))
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error. DEL of an unknown id is not
    /// an error: it yields `Output::Deleted(false)`.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Add {
                item_type,
                id,
                score,
                content,
            } => Ok(Output::Added(
                self.engine.add(item_type, id, score, content),
            )),
            Command::Del { id } => match self.engine.delete(&id) {
                Ok(_) => Ok(Output::Deleted(true)),
                Err(e) if e.is_not_found() => {
                    debug!(id = %id, "DEL ignored");
                    Ok(Output::Deleted(false))
                }
                Err(e) => Err(e.into()),
            },
            Command::Query { k, query } => Ok(Output::Results(ids(self.engine.query(k, &query)))),
            Command::WQuery { k, boosts, query } => Ok(Output::Results(ids(
                self.engine.search(&boosts, k, &query),
            ))),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in order; an error does not stop later commands.
    ///
    /// ```ignore
    /// let results = executor.execute_many(vec![cmd1, cmd2, cmd3]);
    /// // results[0] corresponds to cmd1, etc.
    /// ```
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The engine this executor dispatches to.
    pub fn engine(&self) -> &Arc<Engine> {
        &self.engine
    }
}

fn ids(results: Vec<typeahead_engine::ScoredItem>) -> Vec<String> {
    results.into_iter().map(|s| s.id).collect()
}
