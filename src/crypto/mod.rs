// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no key storage
//!
//! All functions work on in-memory buffers and borrow the key for the
//! duration of one call. Ciphertext layout is `IV (16 bytes) || CBC blocks`.
//!
//! AES-256-CBC with PKCS7 has no integrity check. It is kept for
//! compatibility with existing ciphertexts and key files only.

mod decrypt;
mod encrypt;

pub use decrypt::decrypt_to_vec;
pub use encrypt::{encrypt_to_vec, encrypt_with_iv, generate_iv};
