//! edotenv - Encrypted .env files you can commit.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use edotenv::cli::output;
use edotenv::cli::{execute, Cli};
use edotenv::core::constants;
use edotenv::error::{CipherError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("edotenv=debug")
        } else {
            EnvFilter::new("edotenv=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Store(StoreError::KeyNotFound(_)) => {
                Some("pass --key-path, or run edotenv encrypt to create a key")
            }
            Error::Cipher(CipherError::Authentication) => {
                Some("check that the key file matches the one used to encrypt")
            }
            Error::Cipher(CipherError::InvalidKey(_)) => {
                Some("the key file must contain a 44-character url-safe base64 key")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
