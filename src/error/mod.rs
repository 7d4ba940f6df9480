//! Error module for the trie dictionary.
//!
//! Each layer owns a narrow error type; this module gathers them under a
//! single enum for callers that drive more than one layer at once.

use thiserror::Error;

use crate::data_structures::trie::TrieError;

pub mod config;

/// Result type alias used throughout the trie dictionary.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Core error enum for the trie dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
