//! Recursive length prefix item codec.
//!
//! Node blobs are RLP lists of byte strings and nested lists. The codec here
//! is strict in both directions: `encode` emits the single canonical form and
//! `decode` rejects anything that is not it (truncated input, non-minimal
//! length encodings, trailing bytes after the top-level item).
use crate::error::TrieError;
use alloy_primitives::Bytes;
use alloy_rlp::{Encodable, Header, PayloadView};

/// An RLP item: a byte string or an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Byte string, possibly empty.
    Str(Bytes),
    /// List of nested items, possibly empty.
    List(Vec<Item>),
}

impl Item {
    /// Builds a byte-string item.
    pub fn str(bytes: impl Into<Bytes>) -> Self {
        Item::Str(bytes.into())
    }

    /// Returns the byte-string payload, or `None` for a list.
    pub fn as_str(&self) -> Option<&Bytes> {
        match self {
            Item::Str(bytes) => Some(bytes),
            Item::List(_) => None,
        }
    }
}

/// Encodes an item into its canonical RLP representation.
pub fn encode(item: &Item) -> Vec<u8> {
    match item {
        Item::Str(bytes) => {
            let mut out = Vec::with_capacity(bytes.len() + 4);
            bytes[..].encode(&mut out);
            out
        }
        Item::List(items) => {
            let mut payload = Vec::new();
            for item in items {
                payload.extend_from_slice(&encode(item));
            }
            let mut out = encode_list_header(payload.len());
            out.extend_from_slice(&payload);
            out
        }
    }
}

/// Decodes a single item occupying the whole input.
pub fn decode(buf: &[u8]) -> Result<Item, TrieError> {
    let mut buf = buf;
    let item = decode_item(&mut buf)?;
    if !buf.is_empty() {
        return Err(alloy_rlp::Error::Custom("trailing bytes after rlp item").into());
    }
    Ok(item)
}

fn decode_item(buf: &mut &[u8]) -> Result<Item, TrieError> {
    match Header::decode_raw(buf)? {
        PayloadView::String(payload) => Ok(Item::Str(Bytes::copy_from_slice(payload))),
        PayloadView::List(elements) => {
            let mut items = Vec::with_capacity(elements.len());
            for element in elements {
                let mut element_ref = element;
                items.push(decode_item(&mut element_ref)?);
            }
            Ok(Item::List(items))
        }
    }
}

// Encodes a list header for a known payload length. Reserves memory for the
// full encoding.
#[inline]
pub(crate) fn encode_list_header(payload_length: usize) -> Vec<u8> {
    let header = Header {
        list: true,
        payload_length,
    };
    let mut out = Vec::with_capacity(header.length() + payload_length);
    header.encode(&mut out);
    out
}
