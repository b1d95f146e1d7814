//! Raw RSA primitives on bare integers. Callers go through the key types.

use crate::errors::{Error, Result};
use crate::key::{RsaPrivateKey, RsaPublicKey};
use crate::math::mod_pow;

/// Raw RSA encryption of `m` with the public key: `m^e mod n`.
///
/// `m` outside `[0, n)` would be silently reduced and lose information, so it
/// is rejected instead.
#[inline]
pub(crate) fn encrypt(key: &RsaPublicKey, m: u64) -> Result<u64> {
    if m >= key.n() {
        return Err(Error::MessageTooLong);
    }
    Ok(mod_pow(m, key.e(), key.n()))
}

/// Raw RSA decryption of `c` with the private key: `c^d mod n`.
#[inline]
pub(crate) fn decrypt(key: &RsaPrivateKey, c: u64) -> Result<u64> {
    if c >= key.n() {
        return Err(Error::Decryption);
    }
    Ok(mod_pow(c, key.d(), key.n()))
}
