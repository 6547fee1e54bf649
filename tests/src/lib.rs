#![allow(missing_docs)]

#[cfg(test)]
mod tests {
    use alloy_primitives::{hex, Bytes, B256};
    use stored_trie::{MemoryStore, Trie, EMPTY_ROOT_HASH};

    fn build(entries: &[(&[u8], &[u8])]) -> Trie<MemoryStore> {
        let mut trie = Trie::new(MemoryStore::new());
        for &(key, value) in entries {
            trie.insert(key, Bytes::copy_from_slice(value)).unwrap();
        }
        trie
    }

    /// The branching example from the Ethereum wiki and test suite.
    #[test]
    fn wiki_branching_vector() {
        let mut trie = build(&[
            (b"do", b"verb"),
            (b"dog", b"puppy"),
            (b"doge", b"coin"),
            (b"horse", b"stallion"),
        ]);
        assert_eq!(
            trie.root_hash().unwrap(),
            B256::from(hex!(
                "5991bb8c6514148a29db676a14ac506cd2cd5775ace63c30a4fe457715e9ac84"
            ))
        );
    }

    /// The `emptyValues` vector: keys written and later cleared with empty
    /// values must leave no trace in the root.
    #[test]
    fn empty_values_vector() {
        let ops: &[(&[u8], &[u8])] = &[
            (b"do", b"verb"),
            (b"ether", b"wookiedoo"),
            (b"horse", b"stallion"),
            (b"shaman", b"horse"),
            (b"doge", b"coin"),
            (b"ether", b""),
            (b"dog", b"puppy"),
            (b"shaman", b""),
        ];
        let mut trie = Trie::new(MemoryStore::new());
        for &(key, value) in ops {
            trie.insert(key, Bytes::copy_from_slice(value)).unwrap();
        }
        assert_eq!(
            trie.root_hash().unwrap(),
            B256::from(hex!(
                "5991bb8c6514148a29db676a14ac506cd2cd5775ace63c30a4fe457715e9ac84"
            ))
        );
    }

    /// Intermediate roots along the `emptyValues` sequence must each equal
    /// the root of a trie built from scratch over the surviving entries.
    #[test]
    fn empty_values_intermediate_roots() {
        let ops: &[(&[u8], &[u8])] = &[
            (b"do", b"verb"),
            (b"ether", b"wookiedoo"),
            (b"horse", b"stallion"),
            (b"shaman", b"horse"),
            (b"doge", b"coin"),
            (b"ether", b""),
            (b"dog", b"puppy"),
            (b"shaman", b""),
        ];
        let mut trie = Trie::new(MemoryStore::new());
        let mut model: Vec<(&[u8], &[u8])> = Vec::new();
        for &(key, value) in ops {
            trie.insert(key, Bytes::copy_from_slice(value)).unwrap();
            model.retain(|&(existing, _)| existing != key);
            if !value.is_empty() {
                model.push((key, value));
            }
            let mut rebuilt = build(&model);
            assert_eq!(trie.root_hash().unwrap(), rebuilt.root_hash().unwrap());
        }
    }

    #[test]
    fn dogs_vector() {
        let mut trie = build(&[
            (b"doe", b"reindeer"),
            (b"dog", b"puppy"),
            (b"dogglesworth", b"cat"),
        ]);
        assert_eq!(
            trie.root_hash().unwrap(),
            B256::from(hex!(
                "8aad789dff2f538bca5d8ea56e8abe10f4c7ba3a5dea95fea4cd6e7c3a1168d3"
            ))
        );
    }

    #[test]
    fn reopen_from_committed_root() {
        let mut trie = build(&[
            (b"do", b"verb"),
            (b"dog", b"puppy"),
            (b"doge", b"coin"),
            (b"horse", b"stallion"),
        ]);
        let root = trie.root_hash().unwrap();

        let mut reopened = Trie::with_root(trie.into_store(), root);
        assert_eq!(
            reopened.get(b"doge").unwrap(),
            Some(Bytes::from_static(b"coin"))
        );
        assert_eq!(
            reopened.get(b"horse").unwrap(),
            Some(Bytes::from_static(b"stallion"))
        );
        assert_eq!(reopened.get(b"cat").unwrap(), None);
        assert_eq!(reopened.root_hash().unwrap(), root);
    }

    /// Mutations never rewrite committed blobs, so an old root stays
    /// readable from the same store after the trie has moved on.
    #[test]
    fn historical_roots_remain_readable() {
        let mut trie = Trie::new(MemoryStore::new());
        trie.insert(b"do", Bytes::from_static(b"verb")).unwrap();
        let first_root = trie.root_hash().unwrap();

        trie.insert(b"dog", Bytes::from_static(b"puppy")).unwrap();
        trie.insert(b"doge", Bytes::from_static(b"coin")).unwrap();
        let second_root = trie.root_hash().unwrap();
        assert_ne!(first_root, second_root);

        let store = trie.into_store();
        let old = Trie::with_root(store.clone(), first_root);
        assert_eq!(old.get(b"do").unwrap(), Some(Bytes::from_static(b"verb")));
        assert_eq!(old.get(b"dog").unwrap(), None);

        let new = Trie::with_root(store, second_root);
        assert_eq!(new.get(b"dog").unwrap(), Some(Bytes::from_static(b"puppy")));
        assert_eq!(new.get(b"doge").unwrap(), Some(Bytes::from_static(b"coin")));
    }

    #[test]
    fn empty_root_reopens_as_empty() {
        let trie = Trie::with_root(MemoryStore::new(), EMPTY_ROOT_HASH);
        assert!(trie.is_empty());
        assert_eq!(trie.get(b"anything").unwrap(), None);
    }
}
