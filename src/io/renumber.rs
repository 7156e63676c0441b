//! Copying an arbitrary tile collection under sequential pattern names
//!
//! The tile loader only understands `pattern(0)..pattern(N-1)`. Renumbering
//! copies every file of a directory into a sibling `<dir>_renamed` directory
//! in sorted name order, so any collection can be fed to the loader.

use crate::io::configuration::RENAMED_SUFFIX;
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::pattern::TilePattern;
use std::path::{Path, PathBuf};

/// Sibling directory that receives the renumbered copies of `directory`
///
/// # Errors
///
/// Returns [`crate::MosaicError::InvalidParameter`] if `directory` has no
/// final path component
pub fn renamed_directory(directory: &Path) -> Result<PathBuf> {
    let trimmed: PathBuf = directory.components().collect();
    let name = trimmed.file_name().ok_or_else(|| {
        invalid_parameter(
            "path",
            &directory.display(),
            &"tile directory needs a final path component",
        )
    })?;
    let renamed = format!("{}{RENAMED_SUFFIX}", name.to_string_lossy());
    Ok(trimmed.with_file_name(renamed))
}

/// Copy every file of `directory` into its `_renamed` sibling
///
/// Returns the new directory. A target left over from an earlier run is
/// emptied first, so it only ever holds the current collection.
/// Subdirectories of `directory` are skipped.
///
/// # Errors
///
/// Returns [`crate::MosaicError::FileSystem`] if listing, creating or copying
/// fails
pub fn renumber_directory(directory: &Path, pattern: &TilePattern) -> Result<PathBuf> {
    let target = renamed_directory(directory)?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(directory)
        .map_err(|e| file_system_error(directory, "read tile directory", e))?
    {
        let path = entry
            .map_err(|e| file_system_error(directory, "read tile directory", e))?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if target.exists() {
        std::fs::remove_dir_all(&target)
            .map_err(|e| file_system_error(&target, "clear renamed directory", e))?;
    }
    std::fs::create_dir_all(&target)
        .map_err(|e| file_system_error(&target, "create directory", e))?;

    for (file, name) in files.iter().zip(pattern.file_names(files.len())) {
        let destination = target.join(name);
        std::fs::copy(file, &destination)
            .map_err(|e| file_system_error(file, "copy tile", e))?;
    }

    Ok(target)
}
