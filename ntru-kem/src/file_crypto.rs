use rand::Rng;

use crate::envelope;
use crate::error::KemError;
use crate::kem::{decapsulate, encapsulate};
use crate::params::PUBLIC_KEY_BYTES;

/// Encrypts an arbitrary payload for the holder of `public_key_bytes`.
/// Returns the KEM encapsulation blob followed by the envelope blob, the
/// single byte string a caller should persist or transmit as one unit.
pub fn encrypt_payload(
    public_key_bytes: &[u8],
    plaintext: &[u8],
    rng: &mut impl Rng,
) -> Result<Vec<u8>, KemError> {
    let (key, ct_blob) = encapsulate(public_key_bytes, rng)?;
    let body = envelope::encrypt(&key, plaintext, rng);

    let mut out = Vec::with_capacity(ct_blob.len() + body.len());
    out.extend(ct_blob);
    out.extend(body);
    Ok(out)
}

/// Decrypts a payload produced by [`encrypt_payload`] using `private_key_bytes`.
pub fn decrypt_payload(private_key_bytes: &[u8], data: &[u8]) -> Result<Vec<u8>, KemError> {
    if data.len() < PUBLIC_KEY_BYTES {
        return Err(KemError::MalformedInput(format!(
            "payload of {} bytes is shorter than the {}-byte encapsulation blob",
            data.len(),
            PUBLIC_KEY_BYTES
        )));
    }
    let (ct_blob, body) = data.split_at(PUBLIC_KEY_BYTES);
    let key = decapsulate(private_key_bytes, ct_blob)?;
    envelope::decrypt(&key, body)
}
