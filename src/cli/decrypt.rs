//! Decrypt command.

use std::path::Path;

use crate::cli::output;
use crate::core::pipeline::Pipeline;
use crate::error::Result;

/// Decrypt an encrypted .env file.
pub fn execute(pipeline: &Pipeline, dotenv_path: &Path, edotenv_path: &Path) -> Result<()> {
    pipeline.decrypt_file(edotenv_path, dotenv_path)?;

    output::success(&format!(
        "decrypted {} -> {}",
        output::path(&edotenv_path.display().to_string()),
        output::path(&dotenv_path.display().to_string())
    ));
    Ok(())
}
