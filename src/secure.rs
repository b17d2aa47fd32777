// src/secure.rs
//! `SecureEncryption` — one key, many encrypt/decrypt calls
//!
//! The key is owned by the instance and zeroized when it is dropped, on
//! every exit path. Each call builds and drops its own cipher context, so
//! there is no state shared between calls beyond the key bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zeroize::Zeroize;

use crate::aliases::Key32;
use crate::consts::KEY_LEN;
use crate::crypto::{decrypt_to_vec, encrypt_to_vec};
use crate::error::{CoreError, Result};

pub struct SecureEncryption {
    key: Key32,
}

impl SecureEncryption {
    /// Copy `key` into zeroizing storage. It must be exactly 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self> {
        let mut bytes: [u8; KEY_LEN] =
            key.try_into().map_err(|_| CoreError::InvalidKeyLength {
                expected: KEY_LEN,
                actual: key.len(),
            })?;
        let key = Key32::new(bytes);
        bytes.zeroize();
        Ok(Self::from_key(key))
    }

    /// Like [`SecureEncryption::new`], but reports a missing key as
    /// [`CoreError::NullKey`] instead of a length error.
    pub fn from_optional(key: Option<&[u8]>) -> Result<Self> {
        match key {
            Some(key) => Self::new(key),
            None => Err(CoreError::NullKey),
        }
    }

    pub fn from_key(key: Key32) -> Self {
        Self { key }
    }

    /// Encrypt with a fresh random IV → `IV || ciphertext`
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        encrypt_to_vec(self.key.expose_secret(), plaintext)
    }

    pub fn decrypt_bytes(&self, input: &[u8]) -> Result<Vec<u8>> {
        decrypt_to_vec(self.key.expose_secret(), input)
    }

    /// UTF-8 encode, encrypt, Base64 encode.
    ///
    /// An empty string is valid and encrypts to one full padding block.
    pub fn encrypt_string(&self, text: &str) -> Result<String> {
        let ciphertext = self.encrypt_bytes(text.as_bytes())?;
        Ok(STANDARD.encode(ciphertext))
    }

    pub fn encrypt_optional_string(&self, text: Option<&str>) -> Result<String> {
        self.encrypt_string(text.ok_or(CoreError::NullInput)?)
    }

    /// Base64 decode, decrypt, UTF-8 decode
    pub fn decrypt_string(&self, encoded: &str) -> Result<String> {
        let ciphertext = STANDARD
            .decode(encoded)
            .map_err(|e| CoreError::InvalidEncoding(e.to_string()))?;
        let plaintext = self.decrypt_bytes(&ciphertext)?;
        Ok(String::from_utf8(plaintext)?)
    }
}

impl std::fmt::Debug for SecureEncryption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureEncryption")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
