#![warn(missing_docs)]

//! Textbook RSA over machine-sized integers.
//!
//! A correctness-focused reference implementation of the RSA arithmetic core:
//! random probable-prime generation (Solovay–Strassen), binary modular
//! exponentiation, the extended Euclidean modular inverse, and the raw
//! encrypt/decrypt transform built from them. All values are `u64`; every
//! multiply-before-reduce step widens to `u128`, which is why factor sizes
//! are bounded.
//!
//! # ☢️️ WARNING: NOT FOR PRODUCTION USE ☢️
//!
//! There is no padding, no constant-time arithmetic, and key sizes fit in a
//! single machine word. This crate exists to make the number theory legible,
//! not to protect data. Use a real cryptographic library for real data.
//!
//! # Usage
//!
//! ```
//! use rsa64::{GenerateParams, RsaPrivateKey, RsaPublicKey};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let private_key = RsaPrivateKey::new(&mut rng, &GenerateParams::default())
//!     .expect("failed to generate a key");
//! let public_key = RsaPublicKey::from(&private_key);
//!
//! // Encrypt
//! let msg = 7;
//! let ciphertext = public_key.encrypt(msg).expect("failed to encrypt");
//!
//! // Decrypt
//! let plaintext = private_key.decrypt(ciphertext).expect("failed to decrypt");
//! assert_eq!(plaintext, msg);
//! ```
//!
//! The random source is caller-owned and passed by reference into every
//! generating call: seed it once per run, and use one generator per thread.

pub use rand_core;

pub mod errors;
pub mod math;
pub mod prime;
pub mod prime_rand;

mod internals;
mod key;

pub use crate::{
    errors::{Error, Result},
    key::{GenerateParams, RsaPrivateKey, RsaPublicKey},
    prime_rand::{RandExponent, RandPrime},
};
