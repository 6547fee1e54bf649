//! Inserting an element, splitting leaves and extensions as needed.
use super::codec::commit;
use super::nodes::{BranchNode, ExtensionNode, LeafNode, Node, NodeRef};
use super::Trie;
use crate::error::TrieError;
use crate::store::NodeStore;
use alloy_primitives::Bytes;
use alloy_trie::Nibbles;

impl<S: NodeStore> Trie<S> {
    pub(super) fn insert_path(
        &mut self,
        node: Node,
        path: Nibbles,
        value: Bytes,
    ) -> Result<Node, TrieError> {
        match node {
            Node::Empty => Ok(Node::Leaf(LeafNode { path, value })),
            Node::Leaf(leaf) => {
                if leaf.path == path {
                    // Override the existing value.
                    return Ok(Node::Leaf(LeafNode { path, value }));
                }
                // Split at the common prefix: both remainders hang off a new
                // branch, an empty remainder becomes the branch value.
                let common = path.common_prefix_length(&leaf.path);
                let mut branch = BranchNode::new();
                self.branch_insert(&mut branch, leaf.path.slice(common..), leaf.value)?;
                self.branch_insert(&mut branch, path.slice(common..), value)?;
                self.wrap_prefix(path.slice(..common), branch)
            }
            Node::Extension(ext) => {
                let common = path.common_prefix_length(&ext.path);
                if common == ext.path.len() {
                    // The extension path is fully shared, descend.
                    let child = self.resolve(&ext.child)?;
                    let new_child = self.insert_path(child, path.slice(common..), value)?;
                    return Ok(Node::Extension(ExtensionNode {
                        path: ext.path,
                        child: commit(new_child, &mut self.store)?,
                    }));
                }
                // Split the extension at the divergence point. The old child
                // keeps its suffix as a shorter extension, or moves into the
                // branch slot directly when the suffix is empty.
                let mut branch = BranchNode::new();
                let idx = ext.path.get_unchecked(common) as usize;
                let suffix = ext.path.slice(common + 1..);
                branch.children[idx] = if suffix.is_empty() {
                    ext.child
                } else {
                    commit(
                        Node::Extension(ExtensionNode {
                            path: suffix,
                            child: ext.child,
                        }),
                        &mut self.store,
                    )?
                };
                self.branch_insert(&mut branch, path.slice(common..), value)?;
                self.wrap_prefix(path.slice(..common), branch)
            }
            Node::Branch(mut branch) => {
                if path.is_empty() {
                    branch.value = Some(value);
                    return Ok(Node::Branch(branch));
                }
                let idx = path.get_unchecked(0) as usize;
                let child_ref = core::mem::replace(&mut branch.children[idx], NodeRef::Empty);
                let child = self.resolve(&child_ref)?;
                let new_child = self.insert_path(child, path.slice(1..), value)?;
                branch.children[idx] = commit(new_child, &mut self.store)?;
                Ok(Node::Branch(branch))
            }
        }
    }

    // Places a key remainder into a fresh branch: an empty remainder sets the
    // branch value, anything else becomes a leaf under its first nibble.
    fn branch_insert(
        &mut self,
        branch: &mut BranchNode,
        remainder: Nibbles,
        value: Bytes,
    ) -> Result<(), TrieError> {
        if remainder.is_empty() {
            branch.value = Some(value);
        } else {
            let idx = remainder.get_unchecked(0) as usize;
            branch.children[idx] = commit(
                Node::Leaf(LeafNode {
                    path: remainder.slice(1..),
                    value,
                }),
                &mut self.store,
            )?;
        }
        Ok(())
    }

    // Wraps a split branch in an extension over the shared prefix, if any.
    fn wrap_prefix(&mut self, prefix: Nibbles, branch: BranchNode) -> Result<Node, TrieError> {
        if prefix.is_empty() {
            Ok(Node::Branch(branch))
        } else {
            Ok(Node::Extension(ExtensionNode {
                path: prefix,
                child: commit(Node::Branch(branch), &mut self.store)?,
            }))
        }
    }
}
