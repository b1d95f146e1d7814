//! Modular arithmetic: exponentiation, gcd, the Jacobi symbol and the
//! extended Euclidean modular inverse.
//!
//! Everything here works on bare `u64` values. Every multiply-before-reduce
//! step widens to `u128` first; that widening is what bounds the modulus size
//! the crate supports, see [`GenerateParams::MAX_FACTOR_BOUND`].
//!
//! [`GenerateParams::MAX_FACTOR_BOUND`]: crate::GenerateParams::MAX_FACTOR_BOUND

/// Computes `base ^ exponent mod modulus` by binary square-and-multiply.
///
/// The result is in `[0, modulus)`; in particular any power mod 1 is 0.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> u64 {
    assert!(modulus != 0, "mod_pow requires a non-zero modulus");

    let m = u128::from(modulus);
    let mut base = u128::from(base) % m;
    let mut exponent = exponent;
    let mut result = 1 % m;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % m;
        }
        exponent >>= 1;
        base = base * base % m;
    }

    result as u64
}

/// Classic Euclidean greatest common divisor.
///
/// `gcd(a, 0) == a` for all `a`, so `gcd(0, 0) == 0`.
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Jacobi returns the Jacobi symbol (a/n), either +1, -1, or 0.
/// The n argument must be an odd integer.
pub fn jacobi(a: u64, n: u64) -> isize {
    assert!(n % 2 == 1, "invalid arguments, n must be an odd integer, but got {n}");

    let mut a = a;
    let mut n = n;
    let mut j = 1;

    loop {
        if n == 1 {
            return j;
        }

        a %= n;
        if a == 0 {
            return 0;
        }

        // handle factors of 2 in a
        let s = a.trailing_zeros();
        if s & 1 != 0 && (n % 8 == 3 || n % 8 == 5) {
            j = -j;
        }
        a >>= s;

        // swap numerator and denominator
        if a % 4 == 3 && n % 4 == 3 {
            j = -j;
        }
        core::mem::swap(&mut a, &mut n);
    }
}

/// Computes the [modular multiplicative inverse] of `value` modulo `modulus`,
/// the unique `d` in `[0, modulus)` with `value * d ≡ 1 (mod modulus)`.
///
/// Returns `None` when no inverse exists, i.e. when
/// `gcd(value, modulus) != 1`.
///
/// The Bézout coefficient of `value` is tracked through the extended
/// Euclidean loop in signed 128-bit arithmetic; its magnitude never exceeds
/// `modulus`, so a single addition normalizes a negative result.
///
/// [modular multiplicative inverse]: https://en.wikipedia.org/wiki/Modular_multiplicative_inverse
pub fn mod_inverse(value: u64, modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }

    let (mut r0, mut r1) = (i128::from(value), i128::from(modulus));
    let (mut x0, mut x1) = (1i128, 0i128);

    while r1 != 0 {
        let q = r0 / r1;
        let r = r0 - q * r1;
        r0 = r1;
        r1 = r;
        let x = x0 - q * x1;
        x0 = x1;
        x1 = x;
    }

    if r0 != 1 {
        return None;
    }
    if x0 < 0 {
        x0 += i128::from(modulus);
    }
    Some(x0 as u64)
}
