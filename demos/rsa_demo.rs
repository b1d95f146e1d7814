//! Step-by-step walkthrough of the RSA pipeline: generate a keypair, encrypt
//! one small message, decrypt it, and check the round trip.

use rsa64::{GenerateParams, RsaPrivateKey, RsaPublicKey};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let msg: u64 = 42;
    let mut rng = rand::thread_rng();

    println!("original message: {msg} [ascii: {}]\n", msg as u8 as char);

    let key = RsaPrivateKey::new(&mut rng, &GenerateParams::default())?;
    let [p, q] = key.primes();
    println!("prime factors: p = {p}, q = {q}");
    println!("modulus: n = p*q = {}", key.n());
    println!("totient: phi = {}", (p - 1) * (q - 1));
    println!("public key: ({}, {})", key.e(), key.n());
    println!("private key: ({}, {})", key.d(), key.n());

    let public_key = RsaPublicKey::from(&key);
    let cipher = public_key.encrypt(msg)?;
    println!("\nencrypted message: {cipher}");

    let plain = key.decrypt(cipher)?;
    println!("decrypted message: {plain}");

    if plain == msg {
        println!("\n{plain} = {msg}, round trip ok");
        Ok(())
    } else {
        Err(format!("round trip failed: {plain} != {msg}").into())
    }
}
