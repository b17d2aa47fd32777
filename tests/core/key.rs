// tests/core/key.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use simple_encrypt::aliases::Key32;
use simple_encrypt::key_ops::{generate_key, key_representations};

#[test]
fn test_generate_key_is_random_and_32_bytes() {
    let key1 = generate_key().unwrap();
    let key2 = generate_key().unwrap();
    assert_eq!(key1.expose_secret().len(), 32);
    assert_ne!(key1.expose_secret(), key2.expose_secret());
}

#[test]
fn test_key_representations_are_correct_and_consistent() {
    let key = Key32::new([0xAB; 32]);
    let repr = key_representations(&key);

    assert_eq!(repr.hex, "AB".repeat(32));
    assert_eq!(repr.base64, "q6urq6urq6urq6urq6urq6urq6urq6urq6urq6urq6s=");
}

#[test]
fn test_key_representations_decode_to_the_same_bytes() {
    let key = generate_key().unwrap();
    let repr = key_representations(&key);

    assert_eq!(repr.base64.len(), 44);
    assert_eq!(repr.hex.len(), 64);
    assert!(repr
        .hex
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    assert_eq!(STANDARD.decode(&repr.base64).unwrap(), key.expose_secret());
    assert_eq!(hex::decode(&repr.hex).unwrap(), key.expose_secret());
}
