//! Lookup of an element by its nibble path.
use super::nodes::Node;
use super::Trie;
use crate::error::TrieError;
use crate::store::NodeStore;
use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

impl<S: NodeStore> Trie<S> {
    pub(super) fn get_path(&self, node: Node, path: Nibbles) -> Result<Option<Bytes>, TrieError> {
        match node {
            Node::Empty => Ok(None),
            Node::Leaf(leaf) => {
                if leaf.path == path {
                    Ok(Some(leaf.value))
                } else {
                    Ok(None)
                }
            }
            Node::Extension(ext) => {
                // Only descend when the extension path is a prefix of the
                // remaining key.
                if path.common_prefix_length(&ext.path) == ext.path.len() {
                    let child = self.resolve(&ext.child)?;
                    self.get_path(child, path.slice(ext.path.len()..))
                } else {
                    Ok(None)
                }
            }
            Node::Branch(branch) => {
                if path.is_empty() {
                    return Ok(branch.value);
                }
                let idx = path.get_unchecked(0) as usize;
                if branch.children[idx].is_empty() {
                    return Ok(None);
                }
                let child = self.resolve(&branch.children[idx])?;
                self.get_path(child, path.slice(1..))
            }
        }
    }
}
