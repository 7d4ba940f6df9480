//! Trie Dictionary Library
//!
//! An in-memory prefix tree for word sets, answering exact membership,
//! prefix autocompletion and edit-distance spelling suggestions. Intended as
//! the core of autocomplete backends and spell-checkers running in a single
//! process.
//!
//! # Architecture
//!
//! - [`data_structures::trie`] holds the trie, its nodes and the Levenshtein
//!   distance used for suggestions.
//! - [`config`] loads and validates settings from files and the environment.
//! - [`logging`] installs the `tracing` subscriber.
//! - [`error`] gathers the per-layer error types.
//!
//! The trie has no internal synchronisation. Share it across threads only
//! behind a lock of the caller's choosing.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::trie::{CandidateScope, Trie, TrieConfig, TrieError};

use crate::config::{DictionaryConfig, Validate};
use crate::error::DictionaryResult;

/// Version information for the trie dictionary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Validates `config` and installs logging according to its `log` section.
pub fn init(config: &DictionaryConfig) -> DictionaryResult<()> {
    config.validate()?;
    logging::init_logging(&config.log)?;
    tracing::info!(version = VERSION, "trie dictionary initialized");
    Ok(())
}

/// Builds an empty trie configured from `config`.
pub fn build_trie(config: &DictionaryConfig) -> Trie {
    Trie::with_config(config.trie.clone())
}
