// src/crypto/encrypt.rs
use aes::Aes256;
use block_padding::Pkcs7;
use cbc::cipher::{BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::consts::{IV_LEN, KEY_LEN};
use crate::error::{CoreError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

/// Fresh random IV from the operating system's CSPRNG
pub fn generate_iv() -> Result<[u8; IV_LEN]> {
    let mut iv = [0u8; IV_LEN];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| CoreError::RandomSourceUnavailable(e.to_string()))?;
    Ok(iv)
}

/// Encrypt plaintext → `IV || AES-256-CBC-PKCS7(plaintext)` with a fresh IV
pub fn encrypt_to_vec(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let iv = generate_iv()?;
    encrypt_with_iv(key, &iv, plaintext)
}

/// Encrypt with a caller-supplied IV.
///
/// The caller is responsible for never reusing an IV under the same key.
/// Only known-answer checks should need this; use [`encrypt_to_vec`].
pub fn encrypt_with_iv(
    key: &[u8; KEY_LEN],
    iv: &[u8; IV_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    // Cipher context lives only for this call; no chaining state survives it
    let encryptor = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|e| CoreError::CryptoBackend(e.to_string()))?;
    let blocks = encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut out = Vec::with_capacity(IV_LEN + blocks.len());
    out.extend_from_slice(iv);
    out.extend_from_slice(&blocks);
    Ok(out)
}
