// src/consts.rs
//! Shared constants — key sizes, encodings and defaults

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// CBC initialization vector length in bytes (one AES block)
pub const IV_LEN: usize = 16;

/// AES block size in bytes
pub const BLOCK_LEN: usize = 16;

/// Length of a padded standard Base64 encoding of a 32-byte key
pub const BASE64_KEY_LEN: usize = 44;

/// Length of a hex encoding of a 32-byte key
pub const HEX_KEY_LEN: usize = 64;

/// Key file used when the caller gives no path
pub const DEFAULT_KEY_FILE: &str = "encryption.key";

/// Optional configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "simple-encrypt.toml";

/// Log filter used when neither RUST_LOG nor the config file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";
