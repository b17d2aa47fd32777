// src/key_file.rs
//! Key file writing and parsing
//!
//! A key file is plain UTF-8 text: `#` comment lines, blank lines, one
//! 44-char Base64 line and one 64-char hex line. The reader identifies the
//! two encodings by line length alone, so the order of lines is free.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, info};
use zeroize::Zeroize;

use crate::aliases::Key32;
use crate::consts::{BASE64_KEY_LEN, HEX_KEY_LEN, KEY_LEN};
use crate::error::{CoreError, Result};
use crate::key_ops::key_representations;

/// Standard alphabet, padded, tolerating non-zero trailing bits in
/// hand-edited key files
const KEY_FILE_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Render the full key file text for `key`
pub fn render_key_file(key: &Key32, generated_at: DateTime<Utc>) -> String {
    let repr = key_representations(key);
    format!(
        "# Encryption Key Generated: {timestamp}\n\
         # WARNING: Keep this file secure and never share it!\n\
         \n\
         # Base64 Format (32 bytes, 256 bits)\n\
         {base64}\n\
         \n\
         # Hex Format (32 bytes, 256 bits)\n\
         {hex}\n",
        timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        base64 = repr.base64,
        hex = repr.hex,
    )
}

/// Blank or whitespace-only input selects `default`
pub fn resolve_key_path(input: &str, default: &Path) -> PathBuf {
    match input.trim() {
        "" => default.to_path_buf(),
        path => PathBuf::from(path),
    }
}

/// Write a freshly rendered key file and return its absolute path.
///
/// The write is not atomic: a failure part-way may leave a partial file.
pub fn save_key_file<P: AsRef<Path>>(path: P, key: &Key32) -> Result<PathBuf> {
    let path = path.as_ref();
    let mut contents = render_key_file(key, Utc::now());
    let written = fs::write(path, contents.as_bytes());
    contents.zeroize();
    written?;

    let full_path = std::path::absolute(path)?;
    info!(path = %full_path.display(), "key file written");
    Ok(full_path)
}

/// Read and parse a key file
pub fn read_key_from_file<P: AsRef<Path>>(path: P) -> Result<Key32> {
    let path = path.as_ref();
    let mut contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CoreError::FileNotFound(path.to_path_buf()),
        _ => CoreError::Io(e),
    })?;
    let key = parse_key_file(&contents);
    contents.zeroize();
    key
}

/// Extract the key from key file text.
///
/// The first Base64 line that decodes to 32 bytes wins. Otherwise the first
/// 64-char line made of 32 valid hex pairs is used. Lines that look like a
/// candidate but fail to decode are skipped.
pub fn parse_key_file(contents: &str) -> Result<Key32> {
    let mut hex_key: Option<Key32> = None;

    for (index, line) in contents.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        match line.len() {
            BASE64_KEY_LEN => match decode_base64_key(line) {
                Some(key) => return Ok(key),
                None => debug!(line = index + 1, "skipping invalid Base64 key candidate"),
            },
            HEX_KEY_LEN if hex_key.is_none() => {
                hex_key = decode_hex_key(line);
                if hex_key.is_none() {
                    debug!(line = index + 1, "skipping invalid hex key candidate");
                }
            }
            _ => {}
        }
    }

    hex_key.ok_or(CoreError::NoValidKeyFound)
}

fn decode_base64_key(line: &str) -> Option<Key32> {
    let mut decoded = KEY_FILE_BASE64.decode(line).ok()?;
    let key = <[u8; KEY_LEN]>::try_from(decoded.as_slice())
        .ok()
        .map(Key32::new);
    decoded.zeroize();
    key
}

fn decode_hex_key(line: &str) -> Option<Key32> {
    let mut bytes = [0u8; KEY_LEN];
    let key = hex::decode_to_slice(line, &mut bytes)
        .ok()
        .map(|()| Key32::new(bytes));
    bytes.zeroize();
    key
}
