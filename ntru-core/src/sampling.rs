use rand::Rng;

use crate::params::N;
use crate::poly::Poly;

/// Samples a polynomial in R_q with exactly `d` coefficients set to +-1 and
/// the rest zero, via a partial Fisher-Yates shuffle over the N index
/// positions: each of the first `d` positions after the partial shuffle is
/// a uniformly chosen distinct index. Requires a cryptographically strong
/// RNG in production call paths.
pub fn random_sparse(q: i64, d: usize, rng: &mut impl Rng) -> Poly {
    assert!(d <= N, "cannot place {} nonzero coefficients in {} slots", d, N);

    let mut positions: [usize; N] = {
        let mut p = [0usize; N];
        for (i, slot) in p.iter_mut().enumerate() {
            *slot = i;
        }
        p
    };

    for i in 0..d {
        let j = i + rng.gen_range(0..N - i);
        positions.swap(i, j);
    }

    let mut coefs = [0i64; N];
    for &pos in positions.iter().take(d) {
        coefs[pos] = if rng.gen::<bool>() { 1 } else { -1 };
    }

    Poly::new(q, &coefs)
}

/// Samples a polynomial in R_q with every coefficient drawn independently
/// and uniformly from {-1, 0, 1}.
pub fn random_ternary(q: i64, rng: &mut impl Rng) -> Poly {
    let mut coefs = [0i64; N];
    for c in coefs.iter_mut() {
        *c = rng.gen_range(-1i64..=1);
    }
    Poly::new(q, &coefs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn random_sparse_has_exact_hamming_weight() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let pol = random_sparse(4096, 67, &mut rng);
        let nonzero = pol.coefs.iter().filter(|&&c| c != 0).count();
        assert_eq!(nonzero, 67);
        for &c in pol.coefs.iter() {
            assert!(c == 0 || c == 1 || c == -1);
        }
    }

    #[test]
    fn random_sparse_positions_are_distinct_across_seeds() {
        let mut rng_a = ChaCha20Rng::from_seed([1u8; 32]);
        let mut rng_b = ChaCha20Rng::from_seed([2u8; 32]);
        let a = random_sparse(4096, 67, &mut rng_a);
        let b = random_sparse(4096, 67, &mut rng_b);
        assert_ne!(a, b);
    }

    #[test]
    fn random_ternary_is_in_range() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let pol = random_ternary(4096, &mut rng);
        for &c in pol.coefs.iter() {
            assert!(c == -1 || c == 0 || c == 1);
        }
    }

    #[test]
    #[should_panic]
    fn random_sparse_rejects_d_greater_than_n() {
        let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
        let _ = random_sparse(4096, N + 1, &mut rng);
    }
}
