//! Writing planned pages to a document's output directory.

use std::fs;
use std::path::Path;

use super::types::SplitPlan;
use crate::error::Result;

/// Delete and recreate a document's output directory.
///
/// Every run is a full rebuild, so pages whose names changed since the
/// previous run never linger.
pub fn reset_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
        tracing::debug!(dir = %dir.display(), "Removed existing output directory");
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write every planned page into `dir`.
///
/// The directory is reset first. Returns the number of pages written.
pub fn write_plan(dir: &Path, plan: &SplitPlan) -> Result<usize> {
    reset_output_dir(dir)?;

    for file in &plan.files {
        fs::write(dir.join(&file.allocation.path), &file.content)?;
    }

    Ok(plan.files.len())
}
