//! Hex-prefix encoding of nibble paths.
//!
//! A path is stored with its parity and a leaf/extension flag packed into the
//! top nibble of the first byte: `flag = 2 * is_leaf + (len % 2)`. Odd paths
//! carry their first nibble in the low half of that byte.
use crate::error::TrieError;
use alloy_trie::nodes::encode_path_leaf;
use alloy_trie::Nibbles;

/// Encodes a nibble path into its hex-prefix byte form.
pub(crate) fn encode_path(path: &Nibbles, is_leaf: bool) -> Vec<u8> {
    encode_path_leaf(path, is_leaf).to_vec()
}

/// Decodes a hex-prefix byte form back into the path and its leaf flag.
pub(crate) fn decode_path(encoded: &[u8]) -> Result<(Nibbles, bool), TrieError> {
    if encoded.is_empty() {
        return Err(TrieError::InvalidPath);
    }
    let nibbles = Nibbles::unpack(encoded);
    let (is_leaf, odd) = match nibbles.get_unchecked(0) {
        0b0000 => (false, false),
        0b0001 => (false, true),
        0b0010 => (true, false),
        0b0011 => (true, true),
        _ => return Err(TrieError::InvalidPath),
    };
    let path = if odd {
        nibbles.slice(1..)
    } else {
        // Even parity pads the first byte with a zero nibble.
        if nibbles.get_unchecked(1) != 0 {
            return Err(TrieError::InvalidPath);
        }
        nibbles.slice(2..)
    };
    Ok((path, is_leaf))
}
