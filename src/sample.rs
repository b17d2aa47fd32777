// src/sample.rs
//! Sample consumer — load a key file, encrypt one line, decrypt it back

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::error::CoreError;
use crate::key_file::read_key_from_file;
use crate::menu::prompt_line;
use crate::secure::SecureEncryption;

/// Run the round trip against the key file at `key_path`.
///
/// Returns whether the decrypted text matched the input; `Ok(false)` also
/// covers an empty input line, where nothing is encrypted.
pub fn run_sample<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    key_path: &Path,
) -> Result<bool> {
    writeln!(output, "SimpleEncrypt Sample")?;
    writeln!(output, "====================\n")?;

    let key = read_key_from_file(key_path).with_context(|| {
        format!(
            "Failed to read encryption key from '{}'. Exiting.",
            key_path.display()
        )
    })?;
    info!(path = %key_path.display(), "encryption key loaded");
    writeln!(output, "Successfully loaded encryption key from file.")?;

    let Some(text) = prompt_line(input, output, "\nEnter text to encrypt: ")? else {
        return Err(CoreError::NullInput).context("No input provided. Exiting.");
    };
    if text.is_empty() {
        writeln!(output, "No input provided. Exiting.")?;
        return Ok(false);
    }

    // Separate instances for each direction; both drop (and wipe) here
    let encrypted = {
        let encryptor = SecureEncryption::new(key.expose_secret())?;
        encryptor.encrypt_string(&text)?
    };
    writeln!(output, "\nEncrypted (Base64):")?;
    writeln!(output, "{encrypted}")?;

    let decrypted = {
        let decryptor = SecureEncryption::new(key.expose_secret())?;
        decryptor.decrypt_string(&encrypted)?
    };
    writeln!(output, "\nDecrypted:")?;
    writeln!(output, "{decrypted}")?;

    let matched = text == decrypted;
    writeln!(output, "\nMatch: {}", if matched { "Yes" } else { "No" })?;
    output.flush()?;
    Ok(matched)
}
