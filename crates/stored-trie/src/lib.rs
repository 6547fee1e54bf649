//! A persistent, store-backed Merkle Patricia Trie with Ethereum-compatible
//! root hashes.
mod error;
mod path;
pub mod rlp;
mod store;
mod trie;

pub use alloy_primitives::{Bytes, B256};
pub use alloy_trie::EMPTY_ROOT_HASH;
pub use error::TrieError;
pub use store::{MemoryStore, NodeStore};
pub use trie::Trie;
