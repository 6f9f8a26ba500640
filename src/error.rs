//! Error types.
//!
//! Each core component has its own error enum; [`Error`] wraps them so
//! callers can match on the domain that failed.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no command specified")]
    NoCommand,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key file errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("key file not found: {}", .0.display())]
    KeyNotFound(PathBuf),

    #[error("failed to read key file {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write key file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Encryption and decryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("authentication failed: wrong key or corrupted data")]
    Authentication,

    #[error("malformed encrypted data: {0}")]
    MalformedBlob(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Env file and environment variable errors.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("file not found: {}", .0.display())]
    MissingSourceFile(PathBuf),

    #[error("environment variable not set: {0}")]
    UndefinedVariable(String),

    #[error("environment variable is not valid unicode: {0}")]
    NotUnicode(String),

    #[error("env data is not valid UTF-8")]
    NotUtf8,

    #[error("cannot set environment variable {0:?}: name or value is not allowed")]
    InvalidVariable(String),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[source] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
