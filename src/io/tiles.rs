//! Populating a tile bank from a directory of pattern-named images

use crate::imaging::resize::resize_exact;
use crate::io::error::{MosaicError, Result, file_system_error};
use crate::io::image::load_image;
use crate::io::pattern::TilePattern;
use crate::mosaic::bank::TileBank;
use std::path::Path;

/// Outcome of a tile loading pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileLoadReport {
    /// Number of filenames that were tried
    pub attempted: usize,
    /// Number of tiles added to the bank
    pub loaded: usize,
    /// Number of filenames that could not be decoded
    pub failed: usize,
}

/// Count the entries of `directory`, which bounds the tile indices tried
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] if the directory cannot be read
pub fn count_entries(directory: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(directory)
        .map_err(|e| file_system_error(directory, "read tile directory", e))?;
    let mut count = 0;
    for entry in entries {
        entry.map_err(|e| file_system_error(directory, "read tile directory", e))?;
        count += 1;
    }
    Ok(count)
}

/// Load tiles `0..N` of `directory`, where N is its entry count
///
/// # Errors
///
/// Returns [`MosaicError::TilesNotLoaded`] if not a single tile was loaded, or
/// [`MosaicError::FileSystem`] if the directory cannot be listed
pub fn load_tiles<F>(
    directory: &Path,
    pattern: &TilePattern,
    tile_size: usize,
    on_tile: F,
) -> Result<(TileBank, TileLoadReport)>
where
    F: FnMut(usize),
{
    let count = count_entries(directory)?;
    load_numbered_tiles(directory, pattern, tile_size, count, on_tile)
}

/// Load tiles `0..count` of `directory` into a fresh bank
///
/// Each file is decoded, resized to `tile_size` x `tile_size` and added to
/// the bank. Files that fail to decode are skipped and counted. `on_tile`
/// receives the number of filenames tried so far.
///
/// # Errors
///
/// Returns [`MosaicError::TilesNotLoaded`] if not a single tile was loaded
pub fn load_numbered_tiles<F>(
    directory: &Path,
    pattern: &TilePattern,
    tile_size: usize,
    count: usize,
    mut on_tile: F,
) -> Result<(TileBank, TileLoadReport)>
where
    F: FnMut(usize),
{
    let mut bank = TileBank::new(tile_size);
    let mut report = TileLoadReport {
        attempted: count,
        ..TileLoadReport::default()
    };

    for (index, file_name) in pattern.file_names(count).enumerate() {
        let tile = load_image(directory.join(file_name))
            .and_then(|buffer| resize_exact(&buffer, tile_size, tile_size));
        match tile {
            Ok(tile) => {
                bank.add(tile)?;
                report.loaded += 1;
            }
            Err(_) => report.failed += 1,
        }
        on_tile(index + 1);
    }

    if report.loaded == 0 {
        return Err(MosaicError::TilesNotLoaded {
            directory: directory.to_path_buf(),
            attempted: count,
        });
    }

    Ok((bank, report))
}
