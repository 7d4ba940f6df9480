//! Error types for the dictionary trie.

/// Errors that can occur in trie operations.
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// A spelling query was given an empty word, which has no first letter.
    #[error("Empty word has no first letter to suggest from")]
    EmptyWord,

    /// Reading a word list failed.
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for trie operations
pub type TrieResult<T> = std::result::Result<T, TrieError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let err = TrieError::EmptyWord;
        assert_eq!(err.to_string(), "Empty word has no first letter to suggest from");

        let err = TrieError::Io(std::io::Error::new(std::io::ErrorKind::Other, "stream closed"));
        assert_eq!(err.to_string(), "Failed to read word list: stream closed");
    }

    #[test]
    fn test_io_error_keeps_kind_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err: TrieError = io.into();

        match &err {
            TrieError::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.source().map(|s| s.to_string()), Some("bad utf-8".to_string()));
    }
}
