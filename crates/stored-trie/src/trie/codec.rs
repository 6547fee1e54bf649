//! Node to RLP conversion and the embed-or-hash rule for child references.
//!
//! A node encodes to the RLP list layout of the yellow paper:
//! leaf `[hp(path, leaf), value]`, extension `[hp(path, ext), child]`,
//! branch `[c0, .., c15, value]`. A child whose encoding is shorter than
//! 32 bytes is embedded verbatim in its parent; anything else is hashed and
//! the blob stored under the digest.
use super::nodes::{BranchNode, ExtensionNode, LeafNode, Node, NodeRef};
use crate::error::TrieError;
use crate::rlp::{self, Item};
use crate::store::NodeStore;
use crate::path;
use alloy_primitives::keccak256;
use alloy_rlp::{Encodable, EMPTY_STRING_CODE};

impl NodeRef {
    // RLP length of this reference inside a parent list.
    fn encoded_length(&self) -> usize {
        match self {
            NodeRef::Empty => 1,
            NodeRef::Inline(raw) => raw.len(),
            NodeRef::Hash(_) => 33,
        }
    }

    // Appends the reference to a parent payload: inline bytes verbatim,
    // hashes as 32-byte strings, absent children as the empty string.
    fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            NodeRef::Empty => out.push(EMPTY_STRING_CODE),
            NodeRef::Inline(raw) => out.extend_from_slice(raw),
            NodeRef::Hash(hash) => hash.encode(out),
        }
    }

    // Classifies a decoded list element. A 32-byte string is always a hash
    // reference: the encoder hashes every encoding of 32 bytes or more, so no
    // inline child can be that long.
    fn from_item(item: &Item) -> Result<Self, TrieError> {
        match item {
            Item::Str(bytes) if bytes.is_empty() => Ok(NodeRef::Empty),
            Item::Str(bytes) if bytes.len() == 32 => {
                Ok(NodeRef::Hash(alloy_primitives::B256::from_slice(bytes)))
            }
            Item::Str(_) => {
                Err(alloy_rlp::Error::Custom("invalid child reference length").into())
            }
            Item::List(_) => Ok(NodeRef::Inline(rlp::encode(item))),
        }
    }
}

impl Node {
    /// Returns the RLP encoding of the node.
    pub(super) fn encode(&self) -> Vec<u8> {
        match self {
            Node::Empty => vec![EMPTY_STRING_CODE],
            Node::Leaf(leaf) => {
                let hp = path::encode_path(&leaf.path, true);
                let mut out =
                    rlp::encode_list_header(hp[..].length() + leaf.value[..].length());
                hp[..].encode(&mut out);
                leaf.value[..].encode(&mut out);
                out
            }
            Node::Extension(ext) => {
                assert!(!ext.path.is_empty(), "extension with empty path");
                assert!(!ext.child.is_empty(), "extension with empty child");
                let hp = path::encode_path(&ext.path, false);
                let mut out =
                    rlp::encode_list_header(hp[..].length() + ext.child.encoded_length());
                hp[..].encode(&mut out);
                ext.child.encode_into(&mut out);
                out
            }
            Node::Branch(branch) => {
                let mut payload = Vec::new();
                for child in &branch.children {
                    child.encode_into(&mut payload);
                }
                match &branch.value {
                    Some(value) => value[..].encode(&mut payload),
                    None => payload.push(EMPTY_STRING_CODE),
                }
                let mut out = rlp::encode_list_header(payload.len());
                out.extend_from_slice(&payload);
                out
            }
        }
    }

    /// Decodes an RLP node blob back into its logical shape.
    pub(super) fn decode(bytes: &[u8]) -> Result<Self, TrieError> {
        match rlp::decode(bytes)? {
            Item::Str(payload) if payload.is_empty() => Ok(Node::Empty),
            Item::Str(_) => Err(alloy_rlp::Error::Custom("string is not a node").into()),
            Item::List(items) => match items.as_slice() {
                [hp, value] => {
                    let hp = hp
                        .as_str()
                        .ok_or(alloy_rlp::Error::Custom("node path must be a string"))?;
                    let (node_path, is_leaf) = path::decode_path(hp)?;
                    if is_leaf {
                        let value = value
                            .as_str()
                            .ok_or(alloy_rlp::Error::Custom("leaf value must be a string"))?;
                        Ok(Node::Leaf(LeafNode {
                            path: node_path,
                            value: value.clone(),
                        }))
                    } else {
                        if node_path.is_empty() {
                            return Err(
                                alloy_rlp::Error::Custom("extension with empty path").into()
                            );
                        }
                        let child = NodeRef::from_item(value)?;
                        if child.is_empty() {
                            return Err(
                                alloy_rlp::Error::Custom("extension with empty child").into()
                            );
                        }
                        Ok(Node::Extension(ExtensionNode {
                            path: node_path,
                            child,
                        }))
                    }
                }
                [slots @ .., value] if slots.len() == 16 => {
                    let mut branch = BranchNode::new();
                    for (idx, slot) in slots.iter().enumerate() {
                        branch.children[idx] = NodeRef::from_item(slot)?;
                    }
                    let value = value
                        .as_str()
                        .ok_or(alloy_rlp::Error::Custom("branch value must be a string"))?;
                    if !value.is_empty() {
                        branch.value = Some(value.clone());
                    }
                    Ok(Node::Branch(branch))
                }
                _ => Err(alloy_rlp::Error::Custom("invalid node list length").into()),
            },
        }
    }
}

/// Encodes a node and turns it into a child reference, storing the blob when
/// it is too large to embed.
pub(super) fn commit<S: NodeStore>(node: Node, store: &mut S) -> Result<NodeRef, TrieError> {
    if matches!(node, Node::Empty) {
        return Ok(NodeRef::Empty);
    }
    let encoded = node.encode();
    if encoded.len() < 32 {
        Ok(NodeRef::Inline(encoded))
    } else {
        let hash = keccak256(&encoded);
        store.put(hash, encoded.into())?;
        Ok(NodeRef::Hash(hash))
    }
}
