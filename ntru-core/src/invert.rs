use crate::params::N;
use crate::poly::Poly;

/// Extended Euclidean algorithm giving the modular inverse of `a` modulo `m`,
/// or `None` if `a` is not a unit in Z/mZ.
fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1i64, 0i64);

    while r != 0 {
        let quotient = old_r / r;
        let tmp_r = old_r - quotient * r;
        old_r = r;
        r = tmp_r;

        let tmp_s = old_s - quotient * s;
        old_s = s;
        s = tmp_s;
    }

    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m))
}

/// Whether `x mod m` is a valid Gauss-Jordan pivot in Z/mZ for m in {2^k,
/// 3*2^k}: a unit exists precisely when the value is coprime to every prime
/// factor of m, i.e. odd, and (when m is itself a multiple of 3) not a
/// multiple of 3.
fn pivot_usable(x: i64, m: i64) -> bool {
    let m3 = m % 3 == 0;
    let v = x.rem_euclid(m);
    let odd = v % 2 != 0;
    odd && (!m3 || v % 3 != 0)
}

/// Computes the coefficient vector of `pol`'s multiplicative inverse in
/// Z/mZ[X]/(X^N - 1) via Gauss-Jordan elimination on the N x (N+1) circulant
/// matrix of `pol` augmented with the unit basis vector, or `None` if `pol`
/// is not invertible in R_m.
pub fn invert(pol: &Poly, m: i64) -> Option<[i64; N]> {
    let ncols = N + 1;
    let mut matrix = vec![vec![0i64; ncols]; N];

    for j in 0..N {
        for i in 0..N {
            matrix[(i + j) % N][j] = pol.coefs[i].rem_euclid(m);
        }
    }
    matrix[0][N] = 1;

    let mut pivot_row_for_col = [usize::MAX; N];
    let mut is_pivot_row = [false; N];

    for j in 0..N {
        let mut found = None;
        for i in 0..N {
            if is_pivot_row[i] {
                continue;
            }
            if pivot_usable(matrix[i][j], m) {
                found = Some(i);
                break;
            }
        }
        let pivot_row = found?;
        is_pivot_row[pivot_row] = true;
        pivot_row_for_col[j] = pivot_row;

        let pivot_inv = mod_inverse(matrix[pivot_row][j], m)?;
        for k in j..ncols {
            matrix[pivot_row][k] = (matrix[pivot_row][k] * pivot_inv).rem_euclid(m);
        }

        for i in 0..N {
            if i == pivot_row {
                continue;
            }
            let c = matrix[i][j];
            if c == 0 {
                continue;
            }
            for k in j..ncols {
                matrix[i][k] = (matrix[i][k] - c * matrix[pivot_row][k]).rem_euclid(m);
            }
        }
    }

    let mut out = [0i64; N];
    for i in 0..N {
        out[i] = matrix[pivot_row_for_col[i]][N];
    }
    Some(out)
}

/// Inverts `pol` in R_q where `q` is a power of two.
pub fn invert_q(pol: &Poly) -> Option<Poly> {
    let q = pol.m;
    let coefs = invert(pol, q)?;
    Some(Poly::new(q, &coefs))
}

/// Inverts `pol` (coefficients in {-1,0,1}) modulo 3*q simultaneously,
/// returning (f^-1 mod 3, f^-1 mod q), or `None` if no such inverse exists.
pub fn invert_p_and_q(pol: &Poly, q: i64) -> Option<(Poly, Poly)> {
    let coefs = invert(pol, 3 * q)?;
    let fp = Poly::new(3, &coefs);
    let fq = Poly::new(q, &coefs);
    Some((fp, fq))
}
