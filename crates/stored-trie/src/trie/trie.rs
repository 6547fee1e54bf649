//! The persistent trie engine over a node store.
use super::codec::commit;
use super::nodes::{Node, NodeRef};
use super::Trie;
use crate::error::TrieError;
use crate::store::NodeStore;
use alloy_primitives::{keccak256, Bytes, B256};
use alloy_trie::{Nibbles, EMPTY_ROOT_HASH};
use tracing::trace;

impl<S: NodeStore> Trie<S> {
    /// Creates an empty trie over `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            root: NodeRef::Empty,
        }
    }

    /// Reopens a trie committed earlier to the same store.
    ///
    /// The well-known empty root loads the empty trie. Any other hash is held
    /// lazily: if the store has no blob for it, the first operation that
    /// needs the root surfaces [`TrieError::MissingNode`].
    pub fn with_root(store: S, root: B256) -> Self {
        let root = if root == EMPTY_ROOT_HASH {
            NodeRef::Empty
        } else {
            NodeRef::Hash(root)
        };
        Self { store, root }
    }

    /// Gets the value stored under `key`.
    pub fn get(&self, key: &[u8]) -> Result<Option<Bytes>, TrieError> {
        let root = self.resolve(&self.root)?;
        self.get_path(root, Nibbles::unpack(key))
    }

    /// Inserts a value under `key`, overriding any previous value. An empty
    /// value is equivalent to removing the key.
    pub fn insert(&mut self, key: &[u8], value: impl Into<Bytes>) -> Result<(), TrieError> {
        let value = value.into();
        if value.is_empty() {
            return self.remove(key);
        }
        trace!(key_len = key.len(), value_len = value.len(), "trie insert");
        let root = self.resolve(&self.root)?;
        let new_root = self.insert_path(root, Nibbles::unpack(key), value)?;
        self.root = commit(new_root, &mut self.store)?;
        Ok(())
    }

    /// Removes `key` from the trie. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &[u8]) -> Result<(), TrieError> {
        trace!(key_len = key.len(), "trie remove");
        let root = self.resolve(&self.root)?;
        if let Some(new_root) = self.remove_path(root, Nibbles::unpack(key))? {
            self.root = commit(new_root, &mut self.store)?;
        }
        Ok(())
    }

    /// Returns the root hash committing to the whole mapping.
    ///
    /// The root blob is written to the store even when it is short enough to
    /// embed, so the trie can be reopened from the returned hash.
    pub fn root_hash(&mut self) -> Result<B256, TrieError> {
        match &self.root {
            NodeRef::Empty => Ok(EMPTY_ROOT_HASH),
            NodeRef::Hash(hash) => Ok(*hash),
            NodeRef::Inline(raw) => {
                let hash = keccak256(raw);
                self.store.put(hash, Bytes::copy_from_slice(raw))?;
                Ok(hash)
            }
        }
    }

    /// Whether the trie holds no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Borrows the backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the trie and returns the backing store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Loads the node behind a reference, hitting the store for hashes.
    pub(super) fn resolve(&self, node_ref: &NodeRef) -> Result<Node, TrieError> {
        match node_ref {
            NodeRef::Empty => Ok(Node::Empty),
            NodeRef::Inline(raw) => Node::decode(raw),
            NodeRef::Hash(hash) => {
                let blob = self
                    .store
                    .get(hash)?
                    .ok_or(TrieError::MissingNode(*hash))?;
                Node::decode(&blob)
            }
        }
    }
}
