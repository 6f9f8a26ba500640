//! Save command.
//!
//! Encrypts selected variables from the current environment.

use std::path::Path;

use crate::cli::output;
use crate::core::pipeline::Pipeline;
use crate::error::Result;

/// Encrypt the named environment variables to `edotenv_path`.
pub fn execute(pipeline: &Pipeline, names: &[String], edotenv_path: &Path) -> Result<()> {
    let doc = pipeline.save_vars(names, edotenv_path)?;

    output::success(&format!(
        "saved {} variables to {}",
        doc.len(),
        output::path(&edotenv_path.display().to_string())
    ));
    for name in doc.names() {
        output::list_item(name);
    }
    Ok(())
}
