use rand::Rng;

use ntru_core::hashing::sha3_256;
use ntru_core::pack::{pack_3, pack_q, unpack_q};
use ntru_core::params::{D, LOG2_Q, N, Q};
use ntru_core::sampling::{random_sparse, random_ternary};

use crate::error::KemError;
use crate::keys::{PrivateKey, PublicKey};
use crate::params::PUBLIC_KEY_BYTES;

/// Encapsulates a fresh 32-byte shared key against `public_key_bytes`,
/// returning (shared_key, ciphertext_blob). `ciphertext_blob` is always
/// exactly `PACKQ_SIZE` bytes.
pub fn encapsulate(public_key_bytes: &[u8], rng: &mut impl Rng) -> Result<([u8; 32], Vec<u8>), KemError> {
    let pk = PublicKey::from_bytes(public_key_bytes)?;

    let r = random_sparse(Q, D, rng);
    let m_poly = random_ternary(Q, rng);
    let c = pk.h.mul(&r).add(&m_poly);

    let mut preimage = pack_3(&r);
    preimage.extend(pack_3(&m_poly));
    let key = sha3_256(&preimage);

    let ct_bytes = pack_q(&c, LOG2_Q);
    Ok((key, ct_bytes))
}

/// Decapsulates `ct_bytes` under `private_key_bytes`, recovering the same
/// 32-byte shared key that `encapsulate` produced against the matching
/// public key.
pub fn decapsulate(private_key_bytes: &[u8], ct_bytes: &[u8]) -> Result<[u8; 32], KemError> {
    let sk = PrivateKey::from_bytes(private_key_bytes)?;
    let c = unpack_q(ct_bytes, N, Q, LOG2_Q)?;

    let a = c.mul(&sk.f).change_ring(3);
    let m_poly = a.mul(&sk.fp).change_ring(Q);
    let r = c.sub(&m_poly).mul(&sk.hq);

    let mut preimage = pack_3(&r);
    preimage.extend(pack_3(&m_poly));
    Ok(sha3_256(&preimage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keygen;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn kem_roundtrip_is_exact() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        let (sk, pk) = keygen(&mut rng);
        let pk_bytes = pk.to_bytes();
        let sk_bytes = sk.to_bytes();

        let (key, ct) = encapsulate(&pk_bytes, &mut rng).unwrap();
        let recovered = decapsulate(&sk_bytes, &ct).unwrap();
        assert_eq!(key, recovered);
        assert_eq!(ct.len(), PUBLIC_KEY_BYTES);
    }

    #[test]
    fn kem_roundtrip_holds_across_many_independent_trials() {
        let mut rng = ChaCha20Rng::from_seed([12u8; 32]);
        for _ in 0..1000 {
            let (sk, pk) = keygen(&mut rng);
            let pk_bytes = pk.to_bytes();
            let sk_bytes = sk.to_bytes();

            let (key, ct) = encapsulate(&pk_bytes, &mut rng).unwrap();
            let recovered = decapsulate(&sk_bytes, &ct).unwrap();
            assert_eq!(key, recovered);
        }
    }

    #[test]
    fn tampered_ciphertext_does_not_silently_decrypt_to_same_key() {
        let mut rng = ChaCha20Rng::from_seed([13u8; 32]);
        let (sk, pk) = keygen(&mut rng);
        let pk_bytes = pk.to_bytes();
        let sk_bytes = sk.to_bytes();

        let (key, mut ct) = encapsulate(&pk_bytes, &mut rng).unwrap();
        ct[0] ^= 1;
        let tampered_key = decapsulate(&sk_bytes, &ct).unwrap();
        assert_ne!(key, tampered_key);
    }

    #[test]
    fn decapsulate_rejects_malformed_ciphertext_length() {
        let mut rng = ChaCha20Rng::from_seed([14u8; 32]);
        let (sk, _pk) = keygen(&mut rng);
        let sk_bytes = sk.to_bytes();
        let bad_ct = vec![0u8; PUBLIC_KEY_BYTES - 1];
        assert!(decapsulate(&sk_bytes, &bad_ct).is_err());
    }
}
