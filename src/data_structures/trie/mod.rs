//! Dictionary Trie Implementation
//!
//! A prefix tree storing a set of words and answering three kinds of query:
//! exact membership, prefix completion and "did you mean" spelling
//! suggestions bounded by Levenshtein distance.
//!
//! Every listing operation returns words in ascending lexicographic order
//! (by Unicode scalar value). The order comes from the node's ordered child
//! map, so it holds for any dictionary.
//!
//! # Example
//!
//! ```
//! use trie_dictionary_lib::data_structures::trie::Trie;
//!
//! let mut trie: Trie = ["cat", "cot", "dog"].into_iter().collect();
//!
//! assert!(trie.search("cat"));
//! assert!(!trie.insert("cat"));
//! assert_eq!(trie.auto_suggest("c"), vec!["cat", "cot"]);
//! assert_eq!(trie.get_spelling_suggestions("cap").unwrap(), vec!["cat", "cot"]);
//! ```
//!
//! # Suggestion scope
//!
//! By default spelling suggestions only consider words that share the
//! query's first letter, so a mistake in the first letter is never
//! corrected. Set [`CandidateScope::AllWords`] to scan the whole dictionary.

mod config;
mod distance;
mod error;
mod node;
mod render;

use std::io::BufRead;

pub use self::config::{CandidateScope, TrieConfig, DEFAULT_MAX_EDIT_DISTANCE};
pub use distance::levenshtein;
pub use error::{TrieError, TrieResult};
pub use node::{TrieNode, ROOT_SYMBOL};

/// A prefix tree of words.
///
/// Each node exclusively owns its children, so dropping the trie drops the
/// whole tree. Nodes are only ever added.
#[derive(Debug)]
pub struct Trie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Number of distinct words inserted
    word_count: usize,

    /// Configuration options
    config: TrieConfig,
}

impl Trie {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `Trie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for spelling suggestions.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            word_count: 0,
            config,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Inserting the empty string marks the root itself as terminal.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// `true` if the word was new, `false` if it was already present.
    pub fn insert<W>(&mut self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.child_or_insert(c);
        }

        if current.is_terminal {
            tracing::trace!(word, "word already present");
            return false;
        }

        current.is_terminal = true;
        self.word_count += 1;
        tracing::trace!(word, words = self.word_count, "word inserted");
        true
    }

    /// Checks whether `word` was inserted.
    ///
    /// Only existing edges are followed; nothing is created.
    pub fn search<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        self.find_node(word.as_ref())
            .map(|node| node.is_terminal)
            .unwrap_or(false)
    }

    /// Returns every stored word starting with `prefix`, in lexicographic order.
    ///
    /// An empty prefix lists the whole dictionary. A prefix that no stored
    /// word starts with yields an empty list.
    pub fn auto_suggest<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        match self.find_node(prefix) {
            Some(node) => Self::words_below(node, prefix),
            None => Vec::new(),
        }
    }

    /// Returns every stored word in lexicographic order.
    pub fn get_all_words(&self) -> Vec<String> {
        Self::words_below(&self.root, "")
    }

    /// Suggests stored words within the configured edit distance of `word`.
    ///
    /// Candidates are drawn according to the configured [`CandidateScope`]
    /// and returned in lexicographic order.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Matching words, possibly empty.
    /// * `Err(TrieError::EmptyWord)` - If `word` is empty.
    pub fn get_spelling_suggestions<W>(&self, word: W) -> TrieResult<Vec<String>>
    where
        W: AsRef<str>,
    {
        let word = word.as_ref();
        let first = word.chars().next().ok_or(TrieError::EmptyWord)?;

        let candidates = match self.config.candidate_scope {
            CandidateScope::FirstLetter => match self.root.child(first) {
                Some(node) => Self::words_below(node, &first.to_string()),
                None => Vec::new(),
            },
            CandidateScope::AllWords => self.get_all_words(),
        };

        let scanned = candidates.len();
        let max_distance = self.config.max_edit_distance;
        let suggestions: Vec<String> = candidates
            .into_iter()
            .filter(|candidate| levenshtein(word, candidate) <= max_distance)
            .collect();

        tracing::debug!(
            word,
            scanned,
            matched = suggestions.len(),
            max_distance,
            "spelling suggestions computed"
        );
        Ok(suggestions)
    }

    /// Inserts every word from `words`.
    ///
    /// # Returns
    ///
    /// The number of words that were not already present.
    pub fn extend_words<I, W>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|word| self.insert(word))
            .count()
    }

    /// Loads a word list, one word per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// The load is not atomic: when reading fails part way, the words read
    /// before the failure stay inserted and are counted by [`Trie::len`].
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of newly inserted words.
    /// * `Err(TrieError::Io)` - If reading from `reader` failed.
    pub fn load_words<R>(&mut self, reader: R) -> TrieResult<usize>
    where
        R: BufRead,
    {
        let mut added = 0;
        let mut lines = 0;
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!(lines, added, error = %e, "word list load stopped early");
                    return Err(e.into());
                }
            };
            lines += 1;
            let word = line.trim();
            if !word.is_empty() && self.insert(word) {
                added += 1;
            }
        }

        tracing::debug!(lines, added, total = self.word_count, "word list loaded");
        Ok(added)
    }

    /// Renders the trie shape as text, children in ascending order.
    pub fn render_structure(&self) -> String {
        render::render(&self.root)
    }

    /// Returns the number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Returns the root node for read-only inspection.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Follows existing edges for `path`, returning the landing node.
    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        let mut current = &self.root;
        for c in path.chars() {
            current = current.child(c)?;
        }
        Some(current)
    }

    /// Collects every word at or below `node`, each prefixed with `prefix`.
    ///
    /// Depth-first walk on an explicit stack. A node is emitted before its
    /// children and children are visited in ascending edge order, which
    /// yields lexicographic output.
    fn words_below(node: &TrieNode, prefix: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut buffer = String::from(prefix);

        // (node, buffer length of its parent, edge leading to it)
        let mut stack: Vec<(&TrieNode, usize, Option<char>)> = vec![(node, buffer.len(), None)];
        while let Some((node, parent_len, edge)) = stack.pop() {
            buffer.truncate(parent_len);
            if let Some(c) = edge {
                buffer.push(c);
            }
            if node.is_terminal {
                words.push(buffer.clone());
            }

            let len = buffer.len();
            stack.extend(node.children().rev().map(|(c, child)| (child, len, Some(c))));
        }
        words
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: AsRef<str>> Extend<W> for Trie {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        self.extend_words(iter);
    }
}

impl<W: AsRef<str>> FromIterator<W> for Trie {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend_words(iter);
        trie
    }
}
