use aes::Aes256;
use cbc::{Decryptor, Encryptor};
use cipher::block_padding::{Pkcs7, UnpadError};
use cipher::generic_array::GenericArray;
use cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::Rng;

use crate::error::KemError;

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

const IV_LEN: usize = 16;

/// Encrypts `plaintext` with AES-256-CBC under `key` (the KEM's 32-byte
/// shared secret) and a freshly drawn 16-byte IV, PKCS#7-padded to the
/// 16-byte block size. Returns IV || ciphertext.
pub fn encrypt(key: &[u8; 32], plaintext: &[u8], rng: &mut impl Rng) -> Vec<u8> {
    let mut iv = [0u8; IV_LEN];
    rng.fill(&mut iv);

    let ciphertext = Aes256CbcEnc::new(GenericArray::from_slice(key), GenericArray::from_slice(&iv))
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut out = Vec::with_capacity(IV_LEN + ciphertext.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&ciphertext);
    out
}

/// Decrypts an IV || ciphertext blob produced by [`encrypt`] under `key`.
/// Padding or length failures surface as `KemError::EnvelopeFailure`.
pub fn decrypt(key: &[u8; 32], data: &[u8]) -> Result<Vec<u8>, KemError> {
    if data.len() < IV_LEN {
        return Err(KemError::EnvelopeFailure(format!(
            "envelope blob of {} bytes is shorter than the {}-byte IV",
            data.len(),
            IV_LEN
        )));
    }
    let (iv, ciphertext) = data.split_at(IV_LEN);

    Aes256CbcDec::new(GenericArray::from_slice(key), GenericArray::from_slice(iv))
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e: UnpadError| KemError::EnvelopeFailure(format!("padding error: {}", e)))
}
