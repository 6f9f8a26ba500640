//! edotenv - Encrypted .env files you can commit.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── encrypt       # .env -> encrypted .env
//! │   ├── decrypt       # encrypted .env -> .env
//! │   ├── clear         # Remove encrypted .env and key files
//! │   ├── save          # Encrypt variables from the current environment
//! │   ├── run           # Run with decrypted variables injected
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .edotenv.toml defaults
//!     ├── key           # Symmetric key type
//!     ├── store         # Key file location, loading and generation
//!     ├── env           # .env parsing and serialization
//!     ├── cipher/       # Authenticated encryption
//!     │   ├── mod       # Cipher trait
//!     │   └── xchacha   # XChaCha20-Poly1305 implementation
//!     └── pipeline      # encrypt/decrypt/load/save operations
//! ```
//!
//! # Example
//!
//! ```no_run
//! use edotenv::core::pipeline::Pipeline;
//! use edotenv::core::store::KeyStore;
//!
//! # fn main() -> edotenv::error::Result<()> {
//! let pipeline = Pipeline::new(KeyStore::beside_executable(), Some(".env.key".into()));
//! pipeline.encrypt_file(".env".as_ref(), ".env.encrypted".as_ref())?;
//! let vars = pipeline.load(".env.encrypted".as_ref())?;
//! assert!(vars.get("DATABASE_URL").is_some());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
