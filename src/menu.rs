// src/menu.rs
//! Interactive key generator menu and its prompt helpers

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::error::Result;
use crate::key_file::{resolve_key_path, save_key_file};
use crate::key_ops::{generate_key, key_representations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    GenerateAndDisplay,
    GenerateAndSave,
    Exit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuInputError {
    #[error("Invalid input. Please enter a number between 1 and 3.")]
    NotANumber(String),

    #[error("Invalid choice. Please enter a number between 1 and 3.")]
    OutOfRange(i64),
}

impl FromStr for MenuChoice {
    type Err = MenuInputError;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        let input = input.trim();
        let number: i64 = input
            .parse()
            .map_err(|_| MenuInputError::NotANumber(input.to_owned()))?;
        match number {
            1 => Ok(MenuChoice::GenerateAndDisplay),
            2 => Ok(MenuChoice::GenerateAndSave),
            3 => Ok(MenuChoice::Exit),
            other => Err(MenuInputError::OutOfRange(other)),
        }
    }
}

/// Print `prompt` without a newline, then read one line.
///
/// Returns `None` once input is closed. The line terminator is stripped,
/// other whitespace is kept.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Run the key generator menu until the user picks Exit or input closes.
///
/// Unreadable or invalid lines print a message and the menu is shown again.
/// Only failures to write `output` end the loop with an error.
pub fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_path: &Path,
) -> io::Result<()> {
    writeln!(output, "SimpleEncrypt Key Generator")?;
    writeln!(output, "===========================")?;
    writeln!(output)?;

    loop {
        writeln!(output, "\nChoose an option:")?;
        writeln!(output, "1. Generate new encryption key")?;
        writeln!(output, "2. Generate and save key to file")?;
        writeln!(output, "3. Exit")?;

        let line = match prompt_line(input, output, "\nEnter your choice (1-3): ") {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("input closed, leaving menu");
                writeln!(output)?;
                return Ok(());
            }
            // read_line consumes the offending line, so the next read moves on
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                debug!(error = %e, "unreadable menu input");
                writeln!(output, "{}", MenuInputError::NotANumber(String::new()))?;
                continue;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                writeln!(output, "\nError reading input: {e}")?;
                return Ok(());
            }
        };

        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::GenerateAndDisplay) => {
                if let Err(e) = display_new_key(output) {
                    writeln!(output, "\nError generating key: {e}")?;
                }
            }
            Ok(MenuChoice::GenerateAndSave) => {
                if let Err(e) = save_new_key(input, output, default_path) {
                    debug!("key file not saved: {e:?}");
                    writeln!(output, "\nError saving key: {e}")?;
                }
            }
            Ok(MenuChoice::Exit) => {
                writeln!(output, "Goodbye!")?;
                return Ok(());
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

fn display_new_key<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\nGenerating new encryption key...")?;
    let key = generate_key()?;
    let repr = key_representations(&key);

    writeln!(output, "\nKey in different formats:")?;
    writeln!(output, "------------------------")?;
    writeln!(output, "Base64: {}", repr.base64)?;
    writeln!(output, "Hex:    {}", repr.hex)?;
    writeln!(output, "Length: {} bytes (256 bits)", key.expose_secret().len())?;
    Ok(())
}

fn save_new_key<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_path: &Path,
) -> Result<()> {
    let prompt = format!(
        "\nEnter the path to save the key (default: {}): ",
        default_path.display()
    );
    let answer = prompt_line(input, output, &prompt)?.unwrap_or_default();
    let path = resolve_key_path(&answer, default_path);

    writeln!(output, "\nGenerating new encryption key...")?;
    let key = generate_key()?;
    let full_path = save_key_file(&path, &key)?;

    writeln!(output, "\nKey successfully saved to: {}", full_path.display())?;
    writeln!(output, "\nFile contains both Base64 and Hex formats of the key.")?;
    writeln!(output, "WARNING: Keep this file secure and never share it!")?;
    Ok(())
}
