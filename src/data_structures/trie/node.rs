//! Node implementation for the dictionary trie.
//!
//! Each node owns its children outright, keyed by the character on the edge
//! leading to them. Children are held in a `BTreeMap`, so iterating them
//! always yields ascending character order.

use std::collections::BTreeMap;
use std::fmt;

/// Symbol stored on the root node. It never takes part in traversal.
pub const ROOT_SYMBOL: char = ' ';

/// A node in the dictionary trie.
///
/// Word length is unbounded, so nothing here recurses over descendants:
/// `Debug` lists only the outgoing edges and `Drop` tears the subtree down
/// with an explicit stack.
pub struct TrieNode {
    /// Map of edge characters to owned child nodes
    children: BTreeMap<char, TrieNode>,

    /// Whether some inserted word ends at this node
    pub is_terminal: bool,

    /// The character this node represents (diagnostics only)
    symbol: char,
}

impl TrieNode {
    /// Creates a new non-terminal node with no children.
    pub fn new(symbol: char) -> Self {
        Self {
            children: BTreeMap::new(),
            is_terminal: false,
            symbol,
        }
    }

    /// Creates the sentinel root node.
    pub fn root() -> Self {
        Self::new(ROOT_SYMBOL)
    }

    /// Returns `true` if an outgoing edge labeled `c` exists.
    pub fn has_child(&self, c: char) -> bool {
        self.children.contains_key(&c)
    }

    /// Returns the child reached through edge `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Returns the child reached through edge `c`, creating it if absent.
    pub fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_insert_with(|| TrieNode::new(c))
    }

    /// Iterates over `(edge, child)` pairs in ascending character order.
    pub fn children(
        &self,
    ) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> + ExactSizeIterator {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The character this node was created for.
    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("symbol", &self.symbol)
            .field("is_terminal", &self.is_terminal)
            .field("edges", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            // `node` is dropped with no children left
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
