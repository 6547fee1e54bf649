//! Error taxonomy of the trie engine.
use alloy_primitives::B256;
use thiserror::Error;

/// Failures surfaced by trie operations. The engine recovers nothing locally;
/// every error carries enough context to identify the offending input or node.
#[derive(Debug, Error)]
pub enum TrieError {
    /// RLP input is truncated, non-minimal, or otherwise not canonical.
    #[error("malformed rlp encoding: {0}")]
    Rlp(#[from] alloy_rlp::Error),

    /// A hex-prefix path is empty or carries an unknown flag nibble.
    #[error("malformed hex-prefix path")]
    InvalidPath,

    /// A 32-byte reference reached during traversal has no entry in the
    /// store. The trie was built against a different store or the store
    /// lost data.
    #[error("node {0} not found in the store")]
    MissingNode(B256),

    /// A structural shape forbidden by the trie invariants was reached.
    /// Unreachable in correct code.
    #[error("trie invariant violated: {0}")]
    Invariant(&'static str),

    /// The storage adapter failed; the underlying error is passed through.
    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl TrieError {
    /// Wraps a storage adapter failure.
    pub fn store<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        TrieError::Store(Box::new(err))
    }
}
