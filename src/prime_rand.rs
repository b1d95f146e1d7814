//! Random search for key material: probable primes and public exponents.

use rand::Rng;

use crate::errors::{Error, Result};
use crate::math::gcd;
use crate::prime::probably_prime;

/// A generic trait for generating random probable primes.
///
/// *Warning*: how random the primes are is entirely up to the provided
/// random number generator.
pub trait RandPrime {
    /// Searches for a probable prime below `bound`.
    ///
    /// Starts from a uniformly random odd candidate in `[1, bound)` and
    /// strides forward by 2, wrapping modulo the even adjustment of `bound`,
    /// until a candidate passes `accuracy` Solovay–Strassen trials. When
    /// `bound` is odd the wrap window includes `bound` itself.
    ///
    /// The search gives up with [`Error::TooFewPrimes`] once it has cycled
    /// through every odd candidate without a hit.
    fn gen_prime(&mut self, bound: u64, accuracy: usize) -> Result<u64>;
}

/// A generic trait for generating random RSA public exponents.
pub trait RandExponent {
    /// Searches for an exponent `e` in `[3, bound)` with
    /// `gcd(e, totient) == 1`.
    ///
    /// Starts from a uniformly random candidate and scans linearly forward,
    /// wrapping modulo `bound` and re-clamping to the floor of 3. Exponents
    /// 1 and 2 are excluded by contract; they are cryptographically weak.
    ///
    /// The search gives up with [`Error::NoCoprimeExponent`] after a full
    /// cycle over the candidate range.
    fn gen_exponent(&mut self, totient: u64, bound: u64) -> Result<u64>;
}

impl<R: Rng> RandPrime for R {
    fn gen_prime(&mut self, bound: u64, accuracy: usize) -> Result<u64> {
        if bound < 2 {
            return Err(Error::FactorBoundTooSmall);
        }

        // the stride modulus needs to be even so that wrapping preserves oddness
        let modulus = bound + bound % 2;
        let mut candidate = self.gen_range(0..bound);
        candidate += 1 - candidate % 2;

        // one full cycle of the +2 stride visits every odd residue below
        // `modulus` exactly once
        for _ in 0..modulus / 2 {
            if probably_prime(self, candidate, accuracy) {
                return Ok(candidate);
            }
            candidate = (candidate + 2) % modulus;
        }
        Err(Error::TooFewPrimes)
    }
}

impl<R: Rng> RandExponent for R {
    fn gen_exponent(&mut self, totient: u64, bound: u64) -> Result<u64> {
        if bound <= 3 {
            return Err(Error::ExponentBoundTooSmall);
        }

        let mut e = self.gen_range(3..bound);
        for _ in 0..bound {
            if gcd(e, totient) == 1 {
                return Ok(e);
            }
            e = (e + 1) % bound;
            if e <= 2 {
                e = 3;
            }
        }
        Err(Error::NoCoprimeExponent)
    }
}
