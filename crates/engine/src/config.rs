//! Engine configuration via `typeahead.toml`
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use typeahead_core::{Error, Result};
use typeahead_search::{IdBoostPolicy, QueryOptions, DEFAULT_FULL_SORT_THRESHOLD};

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "typeahead.toml";

/// Engine configuration loaded from `typeahead.toml`.
///
/// # Example
///
/// ```toml
/// # "match_only" (default) or "pin"
/// id_boost_policy = "pin"
/// full_sort_threshold = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeaheadConfig {
    /// What an id-keyed boost does for an id that did not match the query.
    #[serde(default)]
    pub id_boost_policy: IdBoostPolicy,
    /// `k` at or above which ranking fully sorts the candidates instead of
    /// using the bounded heap. Must be at least 1.
    #[serde(default = "default_full_sort_threshold")]
    pub full_sort_threshold: usize,
}

fn default_full_sort_threshold() -> usize {
    DEFAULT_FULL_SORT_THRESHOLD
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            id_boost_policy: IdBoostPolicy::default(),
            full_sort_threshold: default_full_sort_threshold(),
        }
    }
}

impl TypeaheadConfig {
    /// Check field values that serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if `full_sort_threshold` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.full_sort_threshold == 0 {
            return Err(Error::invalid_input(
                "full_sort_threshold must be at least 1",
            ));
        }
        Ok(())
    }

    /// Query options derived from this config.
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            id_boost_policy: self.id_boost_policy,
            full_sort_threshold: self.full_sort_threshold,
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Typeahead engine configuration
#
# Id-keyed boosts in WQUERY ("<id>:<factor>"):
#   "match_only" = only rescore the item when it matches the query (default)
#   "pin"        = also inject the boosted item when it does not match
id_boost_policy = "match_only"

# Result count at or above which ranking sorts every candidate
# instead of keeping a bounded heap. Output is identical either way.
full_sort_threshold = 1000
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid config TOML or fails
    /// validation.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TypeaheadConfig = toml::from_str(content)
            .map_err(|e| Error::invalid_input(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::internal(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content).map_err(|e| {
            Error::invalid_input(format!("Config file '{}': {}", path.display(), e))
        })
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::internal(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::internal(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
