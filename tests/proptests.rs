//! Property-based tests.

use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use rsa64::math::{gcd, mod_inverse, mod_pow};
use rsa64::{GenerateParams, RsaPrivateKey, RsaPublicKey};

prop_compose! {
    // WARNING: do *NOT* copy and paste this code. It's insecure and optimized for test speed.
    fn private_key()(seed in any::<[u8; 32]>()) -> RsaPrivateKey {
        let mut rng = ChaCha8Rng::from_seed(seed);
        RsaPrivateKey::new(&mut rng, &GenerateParams::default()).unwrap()
    }
}

proptest! {
    #[test]
    fn encrypt_decrypt_roundtrip(key in private_key(), m_seed in any::<u64>()) {
        let m = m_seed % key.n();
        let c = RsaPublicKey::from(&key).encrypt(m).unwrap();
        prop_assert_eq!(key.decrypt(c).unwrap(), m);
    }

    #[test]
    fn mod_pow_matches_naive(base in 0u64..64, exp in 0u64..24, modulus in 1u64..1024) {
        let mut expected = 1 % modulus;
        for _ in 0..exp {
            expected = expected * base % modulus;
        }
        prop_assert_eq!(mod_pow(base, exp, modulus), expected);
    }

    #[test]
    fn mod_pow_stays_below_modulus(base in any::<u64>(), exp in any::<u64>(), modulus in 1u64..) {
        prop_assert!(mod_pow(base, exp, modulus) < modulus);
    }

    #[test]
    fn mod_inverse_is_inverse(value in 1u64..5000, modulus in 2u64..5000) {
        prop_assume!(gcd(value, modulus) == 1);
        let inverse = mod_inverse(value, modulus).unwrap();
        prop_assert!(inverse < modulus);
        prop_assert_eq!(
            u128::from(value) * u128::from(inverse) % u128::from(modulus),
            1u128
        );
    }
}
