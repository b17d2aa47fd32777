// src/bin/encrypt_sample.rs
//! Sample consumer — load the key file, encrypt one line, decrypt it back

use std::io;
use std::process::ExitCode;

use simple_encrypt::sample::run_sample;
use tracing::debug;

fn main() -> ExitCode {
    let config = simple_encrypt::load_config();
    simple_encrypt::logging::init(&config.logging.level);

    let stdin = io::stdin();
    match run_sample(&mut stdin.lock(), &mut io::stdout(), &config.paths.key_file) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("sample failed: {e:?}");
            println!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
