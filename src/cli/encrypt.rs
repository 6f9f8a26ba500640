//! Encrypt command.

use std::path::Path;

use crate::cli::output;
use crate::core::pipeline::Pipeline;
use crate::error::Result;

/// Encrypt a .env file.
pub fn execute(pipeline: &Pipeline, dotenv_path: &Path, edotenv_path: &Path) -> Result<()> {
    let doc = pipeline.encrypt_file(dotenv_path, edotenv_path)?;

    output::success(&format!(
        "encrypted {} -> {} ({} variables)",
        output::path(&dotenv_path.display().to_string()),
        output::path(&edotenv_path.display().to_string()),
        doc.len()
    ));
    output::kv("key", pipeline.key_path().display());
    Ok(())
}
