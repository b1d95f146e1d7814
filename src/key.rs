//! RSA key types and the generation pipeline.

use rand::Rng;
use zeroize::Zeroize;

use crate::errors::{Error, Result};
use crate::internals;
use crate::math::mod_inverse;
use crate::prime_rand::{RandExponent, RandPrime};

/// Fresh draws allowed when the second prime collides with the first.
const DISTINCT_PRIME_RETRIES: usize = 32;

/// Bounds and accuracy for [`RsaPrivateKey::new`].
///
/// The defaults match the classic reference demo: factors below 10 000,
/// public exponents below 1 000, five Solovay–Strassen trials per candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateParams {
    /// Upper bound for each prime factor search.
    pub factor_bound: u64,
    /// Upper bound for the public exponent search.
    pub exponent_bound: u64,
    /// Solovay–Strassen trials per primality check; the false-positive
    /// probability of each check is at most `4^-accuracy`.
    pub accuracy: usize,
}

impl Default for GenerateParams {
    fn default() -> Self {
        GenerateParams {
            factor_bound: 10_000,
            exponent_bound: 1_000,
            accuracy: 5,
        }
    }
}

impl GenerateParams {
    /// Largest permitted `factor_bound`.
    ///
    /// Factors below 2^32 keep `n = p * q`, the totient, and every
    /// `mod_pow` intermediate inside the widened 128-bit arithmetic.
    pub const MAX_FACTOR_BOUND: u64 = 1 << 32;

    fn validate(&self) -> Result<()> {
        if self.factor_bound < 4 {
            return Err(Error::FactorBoundTooSmall);
        }
        if self.factor_bound > Self::MAX_FACTOR_BOUND {
            return Err(Error::FactorBoundTooLarge);
        }
        if self.exponent_bound <= 3 {
            return Err(Error::ExponentBoundTooSmall);
        }
        Ok(())
    }
}

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKey {
    n: u64,
    e: u64,
}

/// Represents a whole RSA key, public and private parts.
///
/// The private exponent and the prime factors are wiped on drop.
#[derive(Debug, Clone)]
pub struct RsaPrivateKey {
    pubkey: RsaPublicKey,
    /// Private exponent.
    d: u64,
    /// Prime factors of `n`.
    primes: [u64; 2],
}

impl RsaPublicKey {
    /// Creates a public key from raw components.
    ///
    /// The modulus must be odd (a product of two odd primes always is) and
    /// the exponent at least 3.
    pub fn new(n: u64, e: u64) -> Result<RsaPublicKey> {
        if e < 3 {
            return Err(Error::PublicExponentTooSmall);
        }
        if n % 2 == 0 {
            return Err(Error::InvalidModulus);
        }
        Ok(RsaPublicKey { n, e })
    }

    /// Returns the modulus of the key.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Returns the public exponent of the key.
    pub fn e(&self) -> u64 {
        self.e
    }

    /// Encrypts `m` with the public key: `m^e mod n`.
    ///
    /// `m` must be in `[0, n)`, otherwise [`Error::MessageTooLong`] is
    /// returned.
    pub fn encrypt(&self, m: u64) -> Result<u64> {
        internals::encrypt(self, m)
    }
}

impl From<RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: RsaPrivateKey) -> Self {
        private_key.pubkey
    }
}

impl From<&RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: &RsaPrivateKey) -> Self {
        private_key.pubkey
    }
}

impl RsaPrivateKey {
    /// Generates a fresh keypair from the given random source.
    ///
    /// Runs the whole pipeline: two distinct probable primes below
    /// `params.factor_bound`, the modulus and totient, a random public
    /// exponent coprime to the totient, and the private exponent derived by
    /// the extended Euclidean algorithm.
    pub fn new<R: Rng>(rng: &mut R, params: &GenerateParams) -> Result<RsaPrivateKey> {
        params.validate()?;

        let p = rng.gen_prime(params.factor_bound, params.accuracy)?;
        let mut q = rng.gen_prime(params.factor_bound, params.accuracy)?;

        // make sure the two factors are unequal
        let mut retries = 0;
        while q == p {
            if retries >= DISTINCT_PRIME_RETRIES {
                return Err(Error::TooFewPrimes);
            }
            q = rng.gen_prime(params.factor_bound, params.accuracy)?;
            retries += 1;
        }

        let n = p * q;
        let totient = (p - 1) * (q - 1);

        let e = rng.gen_exponent(totient, params.exponent_bound)?;
        // gcd(e, totient) = 1 is guaranteed by the exponent search
        let d = mod_inverse(e, totient).ok_or(Error::Internal)?;

        Ok(RsaPrivateKey {
            pubkey: RsaPublicKey { n, e },
            d,
            primes: [p, q],
        })
    }

    /// Constructs a key from raw components, checking that they agree.
    pub fn from_components(n: u64, e: u64, d: u64, primes: [u64; 2]) -> Result<RsaPrivateKey> {
        let key = RsaPrivateKey {
            pubkey: RsaPublicKey::new(n, e)?,
            d,
            primes,
        };
        key.validate()?;
        Ok(key)
    }

    /// Checks the key invariants: `n = p * q` and `e * d ≡ 1 (mod φ)`.
    pub fn validate(&self) -> Result<()> {
        let [p, q] = self.primes;
        if p < 2 || q < 2 || p.checked_mul(q) != Some(self.pubkey.n) {
            return Err(Error::InvalidModulus);
        }

        let totient = u128::from(p - 1) * u128::from(q - 1);
        if u128::from(self.pubkey.e) * u128::from(self.d) % totient != 1 {
            return Err(Error::InvalidExponent);
        }
        Ok(())
    }

    /// Returns the modulus of the key.
    pub fn n(&self) -> u64 {
        self.pubkey.n
    }

    /// Returns the public exponent of the key.
    pub fn e(&self) -> u64 {
        self.pubkey.e
    }

    /// Returns the private exponent of the key.
    pub fn d(&self) -> u64 {
        self.d
    }

    /// Returns the prime factors of the modulus.
    pub fn primes(&self) -> [u64; 2] {
        self.primes
    }

    /// Decrypts `c` with the private key: `c^d mod n`.
    ///
    /// `c` must be in `[0, n)`, otherwise [`Error::Decryption`] is returned.
    pub fn decrypt(&self, c: u64) -> Result<u64> {
        internals::decrypt(self, c)
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
        self.primes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_textbook_vector() {
        // p = 61, q = 53: n = 3233, phi = 3120, e = 17, d = 2753
        let key = RsaPrivateKey::from_components(3233, 17, 2753, [61, 53]).unwrap();
        assert_eq!(key.n(), 3233);
        assert_eq!(key.e(), 17);
        assert_eq!(key.d(), 2753);

        let public_key = RsaPublicKey::from(&key);
        assert_eq!(public_key.encrypt(65), Ok(2790));
        assert_eq!(key.decrypt(2790), Ok(65));
    }

    #[test]
    fn test_from_into() {
        let key = RsaPrivateKey::from_components(3233, 17, 2753, [61, 53]).unwrap();
        let public_key: RsaPublicKey = (&key).into();
        assert_eq!(public_key.n(), 3233);
        assert_eq!(public_key.e(), 17);
    }

    #[test]
    fn test_from_components_rejects_mismatch() {
        assert_eq!(
            RsaPrivateKey::from_components(3233, 17, 2752, [61, 53]).unwrap_err(),
            Error::InvalidExponent
        );
        assert_eq!(
            RsaPrivateKey::from_components(3233, 17, 2753, [61, 59]).unwrap_err(),
            Error::InvalidModulus
        );
        assert_eq!(
            RsaPrivateKey::from_components(3233, 2, 2753, [61, 53]).unwrap_err(),
            Error::PublicExponentTooSmall
        );
    }

    #[test]
    fn test_encrypt_decrypt_range_checks() {
        let key = RsaPrivateKey::from_components(3233, 17, 2753, [61, 53]).unwrap();
        let public_key = RsaPublicKey::from(&key);
        assert_eq!(public_key.encrypt(3233), Err(Error::MessageTooLong));
        assert_eq!(key.decrypt(u64::MAX), Err(Error::Decryption));
        assert_eq!(public_key.encrypt(0), Ok(0));
        assert_eq!(key.decrypt(0), Ok(0));
    }

    #[test]
    fn test_impossible_params() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);

        let too_small = GenerateParams {
            factor_bound: 2,
            ..Default::default()
        };
        assert_eq!(
            RsaPrivateKey::new(&mut rng, &too_small).unwrap_err(),
            Error::FactorBoundTooSmall
        );

        let too_large = GenerateParams {
            factor_bound: GenerateParams::MAX_FACTOR_BOUND + 1,
            ..Default::default()
        };
        assert_eq!(
            RsaPrivateKey::new(&mut rng, &too_large).unwrap_err(),
            Error::FactorBoundTooLarge
        );

        let no_exponents = GenerateParams {
            exponent_bound: 3,
            ..Default::default()
        };
        assert_eq!(
            RsaPrivateKey::new(&mut rng, &no_exponents).unwrap_err(),
            Error::ExponentBoundTooSmall
        );

        // 3 is the only prime below 4, so two distinct factors cannot exist
        let one_prime = GenerateParams {
            factor_bound: 4,
            ..Default::default()
        };
        assert_eq!(
            RsaPrivateKey::new(&mut rng, &one_prime).unwrap_err(),
            Error::TooFewPrimes
        );
    }

    macro_rules! key_generation {
        ($name:ident, $factor_bound:expr, $exponent_bound:expr) => {
            #[test]
            fn $name() {
                let mut rng = ChaCha8Rng::from_seed([42; 32]);
                let params = GenerateParams {
                    factor_bound: $factor_bound,
                    exponent_bound: $exponent_bound,
                    accuracy: 5,
                };
                for _ in 0..10 {
                    let key = RsaPrivateKey::new(&mut rng, &params).unwrap();
                    key.validate().unwrap();

                    let [p, q] = key.primes();
                    assert_ne!(p, q);
                    assert!(key.e() >= 3);

                    let m = key.n() / 2;
                    let c = RsaPublicKey::from(&key).encrypt(m).unwrap();
                    assert_eq!(key.decrypt(c), Ok(m));
                }
            }
        };
    }

    key_generation!(key_generation_default, 10_000, 1_000);
    key_generation!(key_generation_small, 100, 50);
    key_generation!(key_generation_max_bound, 1 << 32, 1 << 20);
}
