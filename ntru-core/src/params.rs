/// Ring degree of the quotient ring X^N - 1. Fixed and prime.
pub const N: usize = 101;

/// Large modulus, a power of two.
pub const Q: i64 = 4096;

/// log2(Q).
pub const LOG2_Q: u32 = 12;

/// Target Hamming weight of sparse secret/ephemeral polynomials.
pub const D: usize = 67;

/// Byte length of a pack3-encoded R_3 polynomial: ceil(N / 5).
pub const PACK3_SIZE: usize = (N + 4) / 5;

/// Byte length of a packq-encoded R_q polynomial: ceil(N * log2(Q) / 8).
pub const PACKQ_SIZE: usize = (N * LOG2_Q as usize + 7) / 8;
