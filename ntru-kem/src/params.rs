//! Re-exports and derived sizes on top of the fixed ring parameters in
//! `ntru_core::params`, scoped to what key/ciphertext (de)serialization
//! needs.

pub use ntru_core::params::{D, LOG2_Q, N, PACK3_SIZE, PACKQ_SIZE, Q};

/// Byte length of a serialized private key: pack3(f) || pack3(fp) || packq(hq).
pub const PRIVATE_KEY_BYTES: usize = 2 * PACK3_SIZE + PACKQ_SIZE;

/// Byte length of a serialized public key: packq(h).
pub const PUBLIC_KEY_BYTES: usize = PACKQ_SIZE;
