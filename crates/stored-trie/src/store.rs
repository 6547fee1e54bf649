//! Content-addressed node storage.
//!
//! The engine reads and writes node blobs keyed by their keccak256 digest.
//! Anything that can answer `get`/`put`/`contains` over 32-byte keys can back
//! a trie; the engine itself never deletes and requires no more than
//! read-your-writes consistency within a single instance.
use crate::error::TrieError;
use alloy_primitives::map::B256Map;
use alloy_primitives::{Bytes, B256};

/// A content-addressed key/value store for RLP node blobs.
///
/// Puts are idempotent by construction: a key is always the keccak256 digest
/// of its value. Adapter failures are wrapped in [`TrieError::Store`] and
/// propagated to the caller verbatim.
pub trait NodeStore {
    /// Fetches the blob stored under `hash`, if any.
    fn get(&self, hash: &B256) -> Result<Option<Bytes>, TrieError>;

    /// Stores `blob` under `hash`.
    fn put(&mut self, hash: B256, blob: Bytes) -> Result<(), TrieError>;

    /// Reports whether an entry exists under `hash`.
    fn contains(&self, hash: &B256) -> Result<bool, TrieError>;
}

/// In-memory reference adapter backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: B256Map<Bytes>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store holds no blobs.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl NodeStore for MemoryStore {
    fn get(&self, hash: &B256) -> Result<Option<Bytes>, TrieError> {
        Ok(self.blobs.get(hash).cloned())
    }

    fn put(&mut self, hash: B256, blob: Bytes) -> Result<(), TrieError> {
        self.blobs.insert(hash, blob);
        Ok(())
    }

    fn contains(&self, hash: &B256) -> Result<bool, TrieError> {
        Ok(self.blobs.contains_key(hash))
    }
}
