use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{BriefError, Result};
use crate::render::DigestDocument;

/// Write the digest under `base_dir`, creating it if needed.
///
/// An existing file with the same name is overwritten, so a rerun in the same
/// period of the same day replaces the earlier digest.
pub fn write(document: &DigestDocument, base_dir: &Path) -> Result<PathBuf> {
    if !base_dir.is_dir() {
        fs::create_dir_all(base_dir).map_err(|source| BriefError::Write {
            path: base_dir.to_path_buf(),
            source,
        })?;
        info!("Created directory: {}", base_dir.display());
    }

    let path = base_dir.join(&document.filename);
    fs::write(&path, document.body.as_bytes()).map_err(|source| BriefError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
