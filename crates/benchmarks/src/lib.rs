//! Shared helpers for the trie benchmarks.
use alloy_primitives::{keccak256, Bytes};

/// Deterministic workload: `count` hashed keys with values of varying size.
pub fn workload(count: u32) -> Vec<(Vec<u8>, Bytes)> {
    (0..count)
        .map(|i| {
            let key = keccak256(i.to_be_bytes()).to_vec();
            let len = 1 + (i as usize % 60);
            let value: Vec<u8> = (0..len)
                .map(|j| (j as u8).wrapping_mul(31) ^ i as u8)
                .collect();
            (key, Bytes::from(value))
        })
        .collect()
}
