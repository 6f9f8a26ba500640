//! Run command.
//!
//! Executes a command with decrypted variables injected as environment
//! variables. The edotenv process's own environment is not modified.

use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::pipeline::Pipeline;
use crate::error::{Error, Result};

/// Run a command with decrypted variables and exit with its status.
pub fn execute(pipeline: &Pipeline, edotenv_path: &Path, command: &[String]) -> Result<()> {
    let exit_code = run_with_env(pipeline, edotenv_path, command)?;
    std::process::exit(exit_code);
}

/// Run a command with decrypted variables in its environment.
///
/// Returns the child's exit code, or 1 if it was killed by a signal.
pub fn run_with_env(pipeline: &Pipeline, edotenv_path: &Path, command: &[String]) -> Result<i32> {
    let (program, args) = command.split_first().ok_or(Error::NoCommand)?;

    let doc = pipeline.load(edotenv_path)?;
    debug!(program = %program, variables = doc.len(), "running command");

    let mut cmd = std::process::Command::new(program);
    cmd.args(args);

    for (name, value) in doc {
        let value = Zeroizing::new(value);
        cmd.env(name, value.as_str());
    }

    let status = cmd.status()?;
    Ok(status.code().unwrap_or(1))
}
