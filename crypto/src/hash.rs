//! Blake2b-256 hashing.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Hash multiple byte slices in sequence without concatenating them first.
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(blake2b_256(b"forum"), blake2b_256(b"forum"));
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(blake2b_256(b"mint"), blake2b_256(b"burn"));
    }

    #[test]
    fn multi_matches_concatenation() {
        let single = blake2b_256(b"proposal42");
        let multi = blake2b_256_multi(&[b"proposal", b"42"]);
        assert_eq!(single, multi);
    }
}
