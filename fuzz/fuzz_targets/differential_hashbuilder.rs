#![no_main]

use std::collections::BTreeMap;

use alloy_primitives::{Bytes, B256};
use alloy_trie::{HashBuilder, Nibbles};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stored_trie::{MemoryStore, Trie};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert { key: [u8; 32], value: Vec<u8> },
    Remove { key: [u8; 32] },
}

#[derive(Debug, Arbitrary)]
struct Input {
    ops: Vec<Op>,
}

fn model_root(model: &BTreeMap<B256, Bytes>) -> B256 {
    let mut hash_builder = HashBuilder::default();
    for (key, value) in model {
        hash_builder.add_leaf(Nibbles::unpack(*key), value);
    }
    hash_builder.root()
}

fuzz_target!(|input: Input| {
    let mut trie = Trie::new(MemoryStore::new());
    let mut model = BTreeMap::<B256, Bytes>::new();

    for op in &input.ops {
        match op {
            Op::Insert { key, value } => {
                let key = B256::from(*key);
                let value = Bytes::copy_from_slice(value);
                trie.insert(key.as_slice(), value.clone()).expect("insert failed");
                // An empty value is a removal.
                if value.is_empty() {
                    model.remove(&key);
                } else {
                    model.insert(key, value);
                }
            }
            Op::Remove { key } => {
                let key = B256::from(*key);
                trie.remove(key.as_slice()).expect("remove failed");
                model.remove(&key);
            }
        }

        // Validate after each operation so transient divergences are not masked by later ops.
        let expected = model_root(&model);
        let actual = trie.root_hash().expect("root hash failed");
        assert_eq!(actual, expected, "stored-trie root != HashBuilder root");
    }
});
