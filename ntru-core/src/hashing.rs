use sha3::Digest;
use sha3::Sha3_256;

/// SHA3-256 of `data`, used to derive the KEM's shared key from the packed
/// (r, m) pair.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3_256::new();
    Digest::update(&mut hasher, data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha3_256_matches_known_vector() {
        let hash = sha3_256(b"test data");
        let expected = hex::decode("fc88e0ac33ff105e376f4ece95fb06925d5ab20080dbe3aede7dd47e45dfd931")
            .unwrap();
        assert_eq!(hash.as_slice(), expected.as_slice());
    }

    #[test]
    fn sha3_256_is_deterministic() {
        let a = sha3_256(b"some bytes");
        let b = sha3_256(b"some bytes");
        assert_eq!(a, b);
    }

    #[test]
    fn sha3_256_differs_on_different_input() {
        let a = sha3_256(b"input a");
        let b = sha3_256(b"input b");
        assert_ne!(a, b);
    }
}
