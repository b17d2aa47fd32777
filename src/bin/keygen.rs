// src/bin/keygen.rs
//! Interactive key generator — display a fresh key or save it to a key file

use std::io;

use anyhow::{Context, Result};
use simple_encrypt::menu::run_menu;

fn main() -> Result<()> {
    let config = simple_encrypt::load_config();
    simple_encrypt::logging::init(&config.logging.level);

    let stdin = io::stdin();
    run_menu(&mut stdin.lock(), &mut io::stdout(), &config.paths.key_file)
        .context("failed to write to the terminal")
}
