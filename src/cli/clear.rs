//! Clear command.
//!
//! Removes the encrypted .env file (when given) and the key file.

use std::path::Path;

use crate::cli::output;
use crate::core::pipeline::Pipeline;
use crate::error::Result;

/// Delete the encrypted .env and key files. Missing files are skipped.
pub fn execute(pipeline: &Pipeline, edotenv_path: Option<&Path>) -> Result<()> {
    let cleared = pipeline.clear(edotenv_path)?;

    if let Some(path) = edotenv_path {
        report(cleared.encrypted, &path.display().to_string());
    }
    report(cleared.key, &pipeline.key_path().display().to_string());
    Ok(())
}

fn report(removed: bool, path: &str) {
    if removed {
        output::success(&format!("removed {}", output::path(path)));
    } else {
        output::dimmed(&format!("not found: {}", path));
    }
}
