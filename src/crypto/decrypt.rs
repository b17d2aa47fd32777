// src/crypto/decrypt.rs
use aes::Aes256;
use block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, KeyIvInit};

use crate::consts::{BLOCK_LEN, IV_LEN, KEY_LEN};
use crate::error::{CoreError, Result};

type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Decrypt `IV || CBC blocks` → plaintext
///
/// A wrong key usually surfaces as [`CoreError::DecryptionFailed`], but CBC
/// can occasionally produce valid-looking padding over garbage.
pub fn decrypt_to_vec(key: &[u8; KEY_LEN], input: &[u8]) -> Result<Vec<u8>> {
    if input.len() < IV_LEN {
        return Err(CoreError::InvalidCiphertext { len: input.len() });
    }

    let (iv, blocks) = input.split_at(IV_LEN);
    // A bare IV carries no blocks and so no padding: it decrypts to nothing
    if blocks.is_empty() {
        return Ok(Vec::new());
    }
    if blocks.len() % BLOCK_LEN != 0 {
        return Err(CoreError::DecryptionFailed);
    }

    let decryptor = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|e| CoreError::CryptoBackend(e.to_string()))?;
    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(blocks)
        .map_err(|_| CoreError::DecryptionFailed)
}
