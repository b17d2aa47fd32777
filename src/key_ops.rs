// src/key_ops.rs
//! Key generation and representation utilities
//!
//! This module handles secure key generation and the two text
//! representations (Base64 and hex) written to key files.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::aliases::Key32;
use crate::consts::KEY_LEN;
use crate::error::{CoreError, Result};

/// Generate a new random 256-bit key from the operating system's CSPRNG
pub fn generate_key() -> Result<Key32> {
    let mut bytes = [0u8; KEY_LEN];
    if let Err(e) = OsRng.try_fill_bytes(&mut bytes) {
        bytes.zeroize();
        return Err(CoreError::RandomSourceUnavailable(e.to_string()));
    }
    let key = Key32::new(bytes);
    bytes.zeroize();
    Ok(key)
}

/// String representations of a key for display and key files.
///
/// Both strings are wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyRepr {
    /// Standard Base64 with padding (44 chars)
    pub base64: String,
    /// Uppercase hex, no separators (64 chars)
    pub hex: String,
}

pub fn key_representations(key: &Key32) -> KeyRepr {
    KeyRepr {
        base64: STANDARD.encode(key.expose_secret()),
        hex: hex::encode_upper(key.expose_secret()),
    }
}
