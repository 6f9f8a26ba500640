//! Test support utilities for edotenv integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes run with `.current_dir()` set to the temp directory and
/// `EDOTENV_KEY_PATH` pointing inside it, so no key is ever written next to
/// the test binary and tests can run in parallel.
pub struct Test {
    /// Temporary project directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a plaintext `.env` file.
    pub fn with_env(contents: &str) -> Self {
        let t = Self::new();
        t.write(".env", contents);
        t
    }

    /// Create a test environment with `.env` encrypted to `.env.encrypted`.
    pub fn encrypted(contents: &str) -> Self {
        let t = Self::with_env(contents);
        let output = t.encrypt(".env", ".env.encrypted");
        assert!(
            output.status.success(),
            "Failed to encrypt: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Absolute path of a file in the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Key file used by default in this environment.
    pub fn key_path(&self) -> PathBuf {
        self.path(KEY_FILE)
    }

    /// Write a file in the test directory.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Read a file in the test directory as bytes.
    pub fn read(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.path(name)).expect("failed to read test file")
    }

    /// Read a file in the test directory as a string.
    pub fn read_string(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read test file")
    }

    /// Whether a file exists in the test directory.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }
}
