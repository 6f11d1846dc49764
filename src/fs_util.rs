use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{LabError, LabResult};

/// Empties `dir` without removing it.
///
/// Real subdirectories are removed with everything beneath them. Files and
/// symbolic links (including links to directories) are removed as single
/// entries; links are never followed. The first failure aborts the sweep and
/// leaves already-removed entries gone.
pub fn delete_dir_content(dir: impl AsRef<Path>) -> LabResult<()> {
    let dir = dir.as_ref();
    let metadata = fs::metadata(dir).map_err(|e| LabError::filesystem(dir, e))?;
    if !metadata.is_dir() {
        return Err(LabError::filesystem(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let mut removed = 0usize;
    for entry in fs::read_dir(dir).map_err(|e| LabError::filesystem(dir, e))? {
        let entry = entry.map_err(|e| LabError::filesystem(dir, e))?;
        let path = entry.path();
        // `DirEntry::file_type` does not traverse symlinks.
        let file_type = entry
            .file_type()
            .map_err(|e| LabError::filesystem(&path, e))?;

        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| LabError::filesystem(&path, e))?;
        } else {
            remove_single_entry(&path)?;
        }
        trace!(path = %path.display(), "removed entry");
        removed += 1;
    }

    debug!(dir = %dir.display(), removed, "cleared directory content");
    Ok(())
}

#[cfg(windows)]
fn remove_single_entry(path: &Path) -> LabResult<()> {
    // Directory symlinks and junctions need `remove_dir` on Windows.
    fs::remove_file(path)
        .or_else(|_| fs::remove_dir(path))
        .map_err(|e| LabError::filesystem(path, e))
}

#[cfg(not(windows))]
fn remove_single_entry(path: &Path) -> LabResult<()> {
    fs::remove_file(path).map_err(|e| LabError::filesystem(path, e))
}
