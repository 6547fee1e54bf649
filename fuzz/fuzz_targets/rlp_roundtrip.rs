#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stored_trie::rlp::{self, Item};

#[derive(Debug, Arbitrary)]
enum RawItem {
    Str(Vec<u8>),
    List(Vec<RawItem>),
}

fn to_item(raw: &RawItem) -> Item {
    match raw {
        RawItem::Str(bytes) => Item::str(bytes.clone()),
        RawItem::List(items) => Item::List(items.iter().map(to_item).collect()),
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    tree: RawItem,
    raw: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Roundtrip through the codec: encode -> decode.
    let item = to_item(&input.tree);
    let encoded = rlp::encode(&item);
    let decoded = rlp::decode(&encoded).expect("canonical encoding must decode");
    assert_eq!(decoded, item, "item changed after RLP roundtrip");

    // And the other direction: whatever decodes must re-encode bit-exact.
    if input.raw.len() <= 4096 {
        if let Ok(decoded) = rlp::decode(&input.raw) {
            assert_eq!(rlp::encode(&decoded), input.raw, "decode accepted a non-canonical form");
        }
    }
});
