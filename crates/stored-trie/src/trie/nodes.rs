//! Definition of the node types building the trie.
use alloy_primitives::{Bytes, B256};
use alloy_trie::Nibbles;

/// Reference to a child node: absent, embedded raw RLP (shorter than 32
/// bytes), or the keccak256 digest of a blob held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NodeRef {
    Empty,
    Inline(Vec<u8>),
    Hash(B256),
}

impl NodeRef {
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, NodeRef::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeafNode {
    pub(crate) path: Nibbles,
    pub(crate) value: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ExtensionNode {
    /// Shared prefix, always at least one nibble.
    pub(crate) path: Nibbles,
    pub(crate) child: NodeRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BranchNode {
    pub(crate) children: [NodeRef; 16],
    pub(crate) value: Option<Bytes>,
}

impl BranchNode {
    pub(crate) fn new() -> Self {
        Self {
            children: [const { NodeRef::Empty }; 16],
            value: None,
        }
    }

    /// Number of occupied child slots.
    pub(crate) fn occupied(&self) -> usize {
        self.children.iter().filter(|child| !child.is_empty()).count()
    }

    /// Takes the only child out of the branch. Returns `None` unless exactly
    /// one slot is occupied.
    pub(crate) fn take_single_child(&mut self) -> Option<(usize, NodeRef)> {
        let mut found = None;
        for (idx, child) in self.children.iter().enumerate() {
            if !child.is_empty() {
                if found.is_some() {
                    return None;
                }
                found = Some(idx);
            }
        }
        found.map(|idx| (idx, core::mem::replace(&mut self.children[idx], NodeRef::Empty)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Empty,
    Leaf(LeafNode),
    Extension(ExtensionNode),
    Branch(BranchNode),
}
