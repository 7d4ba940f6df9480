//! Data structures for the trie dictionary.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Exclusive ownership, no shared or back pointers
//! - Deterministic output ordering

pub mod trie;

// Re-export common data structures
pub use trie::{Trie, TrieError, TrieResult};
