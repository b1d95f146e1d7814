//! Probabilistic primality checking based on the Solovay–Strassen test.

use rand::Rng;

use crate::math::{jacobi, mod_pow};

/// Records the primes < 64.
const PRIME_BIT_MASK: u64 = 1 << 2
    | 1 << 3
    | 1 << 5
    | 1 << 7
    | 1 << 11
    | 1 << 13
    | 1 << 17
    | 1 << 19
    | 1 << 23
    | 1 << 29
    | 1 << 31
    | 1 << 37
    | 1 << 41
    | 1 << 43
    | 1 << 47
    | 1 << 53
    | 1 << 59
    | 1 << 61;

/// Runs a single Solovay–Strassen trial with base `a`.
///
/// Checks Euler's criterion: for prime `n`, `a^((n-1)/2) mod n` equals the
/// Jacobi symbol `(a/n)`. A `false` result proves `n` composite (`a` is then
/// an Euler witness for `n`); `true` is consistent with primality but proves
/// nothing on its own.
///
/// `n` must be odd and at least 3.
pub fn solovay_strassen(a: u64, n: u64) -> bool {
    let j = jacobi(a, n);
    if j == 0 {
        // a and n share a factor
        return false;
    }
    let x = if j == -1 { n - 1 } else { 1 };
    mod_pow(a, (n - 1) / 2, n) == x
}

/// Reports whether `n` is probably prime, running `trials` Solovay–Strassen
/// rounds with uniformly random bases drawn from `rng`.
///
/// If `n` is prime, the answer is always `true`. If `n` is an odd composite,
/// each round passes with probability at most 1/2 for at most half of all
/// bases, giving a false-positive probability of at most `4^-trials` overall.
/// For `n < 64` the answer is exact regardless of `trials`.
pub fn probably_prime<R: Rng>(rng: &mut R, n: u64, trials: usize) -> bool {
    if n < 64 {
        return PRIME_BIT_MASK & (1 << n) != 0;
    }
    if n % 2 == 0 {
        return false;
    }

    for _ in 0..trials {
        let a = rng.gen_range(2..n);
        if !solovay_strassen(a, n) {
            return false;
        }
    }
    true
}
