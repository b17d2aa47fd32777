// src/lib.rs
//! simple-encrypt — AES-256-CBC encryption with human-readable key files
//!
//! Features:
//! - 256-bit keys from the OS CSPRNG, zeroized on drop (secure-gate)
//! - `IV || AES-256-CBC-PKCS7` ciphertexts with a fresh IV per call
//! - Key files carrying the key as both Base64 and hex
//!
//! There is no MAC: ciphertexts are not authenticated.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod key_file;
pub mod key_ops;
pub mod logging;
pub mod menu;
pub mod sample;
pub mod secure;

// Re-export everything users need at the crate root
pub use aliases::Key32;
pub use config::load as load_config;
pub use error::{CoreError, Result};
pub use key_file::{parse_key_file, read_key_from_file, save_key_file};
pub use key_ops::{generate_key, key_representations, KeyRepr};
pub use secure::SecureEncryption;
