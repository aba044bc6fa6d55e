use rand::Rng;

use ntru_core::invert::{invert_p_and_q, invert_q};
use ntru_core::pack::{pack_3, pack_q, unpack_3, unpack_q};
use ntru_core::params::{D, LOG2_Q, N, PACK3_SIZE, Q};
use ntru_core::poly::Poly;
use ntru_core::sampling::random_sparse;

use crate::error::KemError;
use crate::params::{PRIVATE_KEY_BYTES, PUBLIC_KEY_BYTES};

/// The recipient's private key: the secret sparse polynomial `f`, its
/// inverse `fp` in R_3, and `hq` = the public polynomial's inverse in R_q.
#[derive(Debug, Clone)]
pub struct PrivateKey {
    pub f: Poly,
    pub fp: Poly,
    pub hq: Poly,
}

/// The recipient's public key: `h = 3 * fq * g` in R_q.
#[derive(Debug, Clone)]
pub struct PublicKey {
    pub h: Poly,
}

impl PrivateKey {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(PRIVATE_KEY_BYTES);
        out.extend(pack_3(&self.f));
        out.extend(pack_3(&self.fp));
        out.extend(pack_q(&self.hq, LOG2_Q));
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KemError> {
        if bytes.len() != PRIVATE_KEY_BYTES {
            return Err(KemError::MalformedInput(format!(
                "private key has {} bytes, expected {}",
                bytes.len(),
                PRIVATE_KEY_BYTES
            )));
        }
        let f3 = unpack_3(&bytes[0..PACK3_SIZE], N)?;
        let fp = unpack_3(&bytes[PACK3_SIZE..2 * PACK3_SIZE], N)?;
        let hq = unpack_q(&bytes[2 * PACK3_SIZE..], N, Q, LOG2_Q)?;
        let f = f3.change_ring(Q);
        Ok(PrivateKey { f, fp, hq })
    }
}

impl PublicKey {
    pub fn to_bytes(&self) -> Vec<u8> {
        pack_q(&self.h, LOG2_Q)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KemError> {
        if bytes.len() != PUBLIC_KEY_BYTES {
            return Err(KemError::MalformedInput(format!(
                "public key has {} bytes, expected {}",
                bytes.len(),
                PUBLIC_KEY_BYTES
            )));
        }
        let h = unpack_q(bytes, N, Q, LOG2_Q)?;
        Ok(PublicKey { h })
    }
}

/// Generates a fresh (private, public) key pair, retrying internally on the
/// negligible-probability event that a sampled secret polynomial is not
/// invertible.
pub fn keygen(rng: &mut impl Rng) -> (PrivateKey, PublicKey) {
    let (f, fp, fq) = loop {
        let candidate = random_sparse(Q, D, rng);
        if let Some((fp, fq)) = invert_p_and_q(&candidate, Q) {
            break (candidate, fp, fq);
        }
    };

    let (g, hq, h) = loop {
        let g = random_sparse(Q, D, rng);
        let h = fq.mul_scalar(3).mul(&g);
        if let Some(hq) = invert_q(&h) {
            break (g, hq, h);
        }
    };
    let _ = g; // g is consumed only to produce h; not retained in either key.

    (PrivateKey { f, fp, hq }, PublicKey { h })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn keygen_produces_correctly_sized_keys() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        let (sk, pk) = keygen(&mut rng);
        assert_eq!(sk.to_bytes().len(), PRIVATE_KEY_BYTES);
        assert_eq!(pk.to_bytes().len(), PUBLIC_KEY_BYTES);
    }

    #[test]
    fn key_serialization_round_trips() {
        let mut rng = ChaCha20Rng::from_seed([10u8; 32]);
        let (sk, pk) = keygen(&mut rng);

        let sk_bytes = sk.to_bytes();
        let pk_bytes = pk.to_bytes();

        let sk2 = PrivateKey::from_bytes(&sk_bytes).unwrap();
        let pk2 = PublicKey::from_bytes(&pk_bytes).unwrap();

        assert_eq!(sk2.to_bytes(), sk_bytes);
        assert_eq!(pk2.to_bytes(), pk_bytes);
    }

    #[test]
    fn private_key_rejects_wrong_length() {
        let bytes = vec![0u8; PRIVATE_KEY_BYTES - 1];
        assert!(PrivateKey::from_bytes(&bytes).is_err());
    }

    #[test]
    fn public_key_rejects_wrong_length() {
        let bytes = vec![0u8; PUBLIC_KEY_BYTES + 1];
        assert!(PublicKey::from_bytes(&bytes).is_err());
    }
}
