//! Decoding images into pixel buffers and encoding the finished mosaic

use crate::imaging::buffer::PixelBuffer;
use crate::io::error::{MosaicError, Result, file_system_error};
use std::path::Path;

/// Decode the image at `path` into an RGB pixel buffer
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file cannot be opened or decoded,
/// or [`MosaicError::EmptyImage`] if it decodes to zero area
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| MosaicError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    PixelBuffer::from_rgb_image(&img.to_rgb8())
}

/// Load the base image, reporting a missing file distinctly from a bad one
///
/// # Errors
///
/// Returns [`MosaicError::BaseImageMissing`] if nothing exists at `path`,
/// otherwise the errors of [`load_image`]
pub fn load_base_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(MosaicError::BaseImageMissing {
            path: path.to_path_buf(),
        });
    }
    load_image(path)
}

/// Encode `buffer` to `output_path`, format chosen from the extension
///
/// # Errors
///
/// Returns an error if:
/// - The buffer has zero area
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn save_image<P: AsRef<Path>>(buffer: &PixelBuffer, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let img = buffer.to_rgb_image()?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
