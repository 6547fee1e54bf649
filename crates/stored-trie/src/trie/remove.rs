//! Removing an element and restoring the canonical shape on unwind.
use super::codec::commit;
use super::nodes::{BranchNode, ExtensionNode, LeafNode, Node, NodeRef};
use super::Trie;
use crate::error::TrieError;
use crate::store::NodeStore;
use alloy_trie::Nibbles;

impl<S: NodeStore> Trie<S> {
    /// Removes `path` below `node`. Returns `None` when the key is absent and
    /// the subtree is unchanged.
    pub(super) fn remove_path(
        &mut self,
        node: Node,
        path: Nibbles,
    ) -> Result<Option<Node>, TrieError> {
        match node {
            Node::Empty => Ok(None),
            Node::Leaf(leaf) => {
                if leaf.path == path {
                    Ok(Some(Node::Empty))
                } else {
                    Ok(None)
                }
            }
            Node::Extension(ext) => {
                if path.common_prefix_length(&ext.path) < ext.path.len() {
                    return Ok(None);
                }
                let child = self.resolve(&ext.child)?;
                match self.remove_path(child, path.slice(ext.path.len()..))? {
                    None => Ok(None),
                    Some(new_child) => Ok(Some(self.merge_prefix(ext.path, new_child)?)),
                }
            }
            Node::Branch(mut branch) => {
                if path.is_empty() {
                    if branch.value.is_none() {
                        return Ok(None);
                    }
                    branch.value = None;
                } else {
                    let idx = path.get_unchecked(0) as usize;
                    let child_ref =
                        core::mem::replace(&mut branch.children[idx], NodeRef::Empty);
                    if child_ref.is_empty() {
                        return Ok(None);
                    }
                    let child = self.resolve(&child_ref)?;
                    match self.remove_path(child, path.slice(1..))? {
                        None => {
                            branch.children[idx] = child_ref;
                            return Ok(None);
                        }
                        Some(new_child) => {
                            branch.children[idx] = commit(new_child, &mut self.store)?;
                        }
                    }
                }
                Ok(Some(self.collapse_branch(branch)?))
            }
        }
    }

    // Re-attaches a prefix to a rewritten child: leaves and extensions absorb
    // the prefix into their own path, branches stay behind an extension, an
    // emptied child erases the prefix entirely.
    fn merge_prefix(&mut self, prefix: Nibbles, child: Node) -> Result<Node, TrieError> {
        Ok(match child {
            Node::Empty => Node::Empty,
            Node::Leaf(leaf) => Node::Leaf(LeafNode {
                path: prefix.join(&leaf.path),
                value: leaf.value,
            }),
            Node::Extension(ext) => Node::Extension(ExtensionNode {
                path: prefix.join(&ext.path),
                child: ext.child,
            }),
            branch @ Node::Branch(_) => {
                let child = commit(branch, &mut self.store)?;
                Node::Extension(ExtensionNode {
                    path: prefix,
                    child,
                })
            }
        })
    }

    // A branch left with fewer than two entries after a removal is no longer
    // canonical and must shrink: value only -> leaf with an empty path,
    // single child -> the child behind a one-nibble prefix.
    fn collapse_branch(&mut self, mut branch: BranchNode) -> Result<Node, TrieError> {
        match branch.occupied() {
            0 => Ok(match branch.value {
                Some(value) => Node::Leaf(LeafNode {
                    path: Nibbles::default(),
                    value,
                }),
                None => Node::Empty,
            }),
            1 if branch.value.is_none() => {
                let (idx, child_ref) = branch
                    .take_single_child()
                    .ok_or(TrieError::Invariant("branch occupancy count mismatch"))?;
                let child = self.resolve(&child_ref)?;
                self.merge_prefix(Nibbles::from_nibbles([idx as u8]), child)
            }
            _ => Ok(Node::Branch(branch)),
        }
    }
}
