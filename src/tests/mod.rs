//! Test modules for the trie dictionary.
//!
//! Unit tests live beside the code they cover; this module holds the
//! cross-cutting suites:
//! - Configuration loading and validation
//! - Error conversion and display
//! - Property-based trie tests using proptest

pub mod config_tests;

pub use test_utils::{dictionary_strategy, unicode_word_strategy, word_strategy, TestFixture};
