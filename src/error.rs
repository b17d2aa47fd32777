// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Encryption key cannot be null")]
    NullKey,

    #[error("Input text cannot be null")]
    NullInput,

    #[error("The encrypted text is not a valid Base64 string: {0}")]
    InvalidEncoding(String),

    #[error("Encrypted data is too short to be valid ({len} bytes)")]
    InvalidCiphertext { len: usize },

    #[error("Decryption failed: padding is invalid or the key is wrong")]
    DecryptionFailed,

    #[error("Decrypted data is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("Key file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No valid key found in the file")]
    NoValidKeyFound,

    #[error("Crypto backend failure: {0}")]
    CryptoBackend(String),

    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
