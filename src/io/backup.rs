use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// `<path>.bak`, next to the file it preserves
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Copy an existing file at `path` to its backup location.
/// Returns the backup path, or `None` when there was nothing to preserve.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>> {
    if !path.is_file() {
        return Ok(None);
    }
    let target = backup_path(path);
    fs::copy(path, &target)?;
    info!("Backed up {:?} -> {:?}", path, target);
    Ok(Some(target))
}
