//! Configuration for spelling suggestions.

use serde::{Deserialize, Serialize};

/// Default upper bound on the edit distance of a suggestion.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Which stored words are considered as suggestion candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateScope {
    /// Only words sharing the query's first letter. Misses corrections where
    /// the first letter itself was mistyped, inserted or dropped.
    #[default]
    FirstLetter,

    /// Every word in the dictionary.
    AllWords,
}

/// Configuration for the dictionary trie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieConfig {
    /// Largest edit distance a suggestion may have from the query
    pub max_edit_distance: usize,

    /// Candidate set scanned by spelling suggestions
    pub candidate_scope: CandidateScope,
}

impl TrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_edit_distance: 2
    /// - candidate_scope: `FirstLetter`
    pub fn new() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            candidate_scope: CandidateScope::FirstLetter,
        }
    }

    /// Set the largest edit distance accepted for a suggestion.
    pub fn with_max_edit_distance(mut self, max_edit_distance: usize) -> Self {
        self.max_edit_distance = max_edit_distance;
        self
    }

    /// Set which words are scanned when suggesting spellings.
    pub fn with_candidate_scope(mut self, candidate_scope: CandidateScope) -> Self {
        self.candidate_scope = candidate_scope;
        self
    }
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
