//! Error types.

/// Alias for [`core::result::Result`] with the `rsa64` error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Ciphertext is out of range for the modulus.
    Decryption,

    /// Plaintext does not fit below the modulus.
    MessageTooLong,

    /// Public exponent is below the contractual minimum of 3.
    PublicExponentTooSmall,

    /// Modulus does not match the prime factors, or is even.
    InvalidModulus,

    /// Private and public exponents do not invert each other modulo the totient.
    InvalidExponent,

    /// Factor bound leaves no room for an odd prime candidate.
    FactorBoundTooSmall,

    /// Factor bound would let `p * q` overflow the widened arithmetic.
    FactorBoundTooLarge,

    /// Exponent bound leaves no candidates at or above 3.
    ExponentBoundTooSmall,

    /// Prime search exhausted every odd candidate below the bound.
    TooFewPrimes,

    /// Exponent search found no candidate coprime to the totient.
    NoCoprimeExponent,

    /// Internal error.
    Internal,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Decryption => write!(f, "decryption error"),
            Error::MessageTooLong => write!(f, "message too long"),
            Error::PublicExponentTooSmall => write!(f, "public exponent too small"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::FactorBoundTooSmall => write!(f, "factor bound too small"),
            Error::FactorBoundTooLarge => write!(f, "factor bound too large"),
            Error::ExponentBoundTooSmall => write!(f, "exponent bound too small"),
            Error::TooFewPrimes => write!(f, "too few primes below the factor bound"),
            Error::NoCoprimeExponent => write!(f, "no exponent coprime to the totient"),
            Error::Internal => write!(f, "internal error"),
        }
    }
}

impl std::error::Error for Error {}
