use crate::error::CoreError;
use crate::params::N;
use crate::poly::Poly;

/// Packs a polynomial in R_q (q = 2^log2_q) into a little-endian bitstream,
/// polynomial-index-major, `ceil(N*log2_q/8)` bytes long. Trailing pad bits
/// in the final byte are zero.
pub fn pack_q(pol: &Poly, log2_q: u32) -> Vec<u8> {
    let q = pol.m;
    let total_bits = N * log2_q as usize;
    let mut out = vec![0u8; (total_bits + 7) / 8];

    let mut bit_pos = 0usize;
    for &coef in pol.coefs.iter() {
        let c = coef.rem_euclid(q);
        for bit in 0..log2_q {
            let b = (c >> bit) & 1;
            if b != 0 {
                let idx = bit_pos + bit as usize;
                out[idx / 8] |= 1 << (idx % 8);
            }
        }
        bit_pos += log2_q as usize;
    }
    out
}

/// Inverse of [`pack_q`]. Requires `bytes.len() == ceil(n*log2_q/8)`.
pub fn unpack_q(bytes: &[u8], n: usize, q: i64, log2_q: u32) -> Result<Poly, CoreError> {
    let expected = (n * log2_q as usize + 7) / 8;
    if bytes.len() != expected {
        return Err(CoreError::MalformedInput(format!(
            "packq buffer has {} bytes, expected {}",
            bytes.len(),
            expected
        )));
    }

    let mut coefs = vec![0i64; n];
    let mut bit_pos = 0usize;
    for coef in coefs.iter_mut() {
        let mut value = 0i64;
        for bit in 0..log2_q {
            let idx = bit_pos + bit as usize;
            let b = (bytes[idx / 8] >> (idx % 8)) & 1;
            value |= (b as i64) << bit;
        }
        *coef = value;
        bit_pos += log2_q as usize;
    }
    Ok(Poly::new(q, &coefs))
}

/// Packs a polynomial in R_3 (coefficients in {-1,0,1}) into base-3 digits,
/// five per byte, `ceil(N/5)` bytes long.
pub fn pack_3(pol: &Poly) -> Vec<u8> {
    let out_len = (N + 4) / 5;
    let mut out = Vec::with_capacity(out_len);

    for chunk_idx in 0..out_len {
        let start = chunk_idx * 5;
        let mut s: u32 = 0;
        let mut pow = 1u32;
        for j in 0..5 {
            let digit = if start + j < N {
                pol.coefs[start + j].rem_euclid(3) as u32
            } else {
                0
            };
            s += digit * pow;
            pow *= 3;
        }
        out.push(s as u8);
    }
    out
}

/// Inverse of [`pack_3`]. Requires `bytes.len() == ceil(n/5)` and every byte
/// to be a valid base-3 expansion of five digits (<= 3^5 - 1 = 242).
pub fn unpack_3(bytes: &[u8], n: usize) -> Result<Poly, CoreError> {
    let expected = (n + 4) / 5;
    if bytes.len() != expected {
        return Err(CoreError::MalformedInput(format!(
            "pack3 buffer has {} bytes, expected {}",
            bytes.len(),
            expected
        )));
    }
    for &b in bytes {
        if b > 242 {
            return Err(CoreError::MalformedInput(format!(
                "pack3 byte {} exceeds the maximum valid base-3 expansion 242",
                b
            )));
        }
    }

    let digits_in_last_byte = if n % 5 == 0 { 5 } else { n % 5 };
    let mut coefs = Vec::with_capacity(n);

    for i in 0..expected - 1 {
        let mut b = bytes[i] as u32;
        for _ in 0..5 {
            coefs.push((b % 3) as i64);
            b /= 3;
        }
    }

    let mut last = bytes[expected - 1] as u32;
    for _ in 0..digits_in_last_byte {
        coefs.push((last % 3) as i64);
        last /= 3;
    }

    Ok(Poly::new(3, &coefs))
}
