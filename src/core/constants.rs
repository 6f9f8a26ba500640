//! Constants used throughout edotenv.
//!
//! Centralizes magic strings and configuration values.

/// Project configuration file name (.edotenv.toml).
pub const CONFIG_FILE: &str = ".edotenv.toml";

/// Default plaintext and encrypted env file name (.env).
pub const ENV_FILE: &str = ".env";

/// Key file name used when no key path is given.
pub const KEY_FILE: &str = ".env.key";

/// Environment variable holding the key path.
pub const KEY_PATH_VAR: &str = "EDOTENV_KEY_PATH";

/// Environment variable holding the log filter.
pub const LOG_VAR: &str = "EDOTENV_LOG";

/// Raw key length in bytes.
pub const KEY_SIZE: usize = 32;

/// XChaCha20 nonce length in bytes.
pub const NONCE_SIZE: usize = 24;

/// Poly1305 tag length in bytes.
pub const TAG_SIZE: usize = 16;
