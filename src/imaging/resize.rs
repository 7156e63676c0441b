//! Aspect-preserving and exact resizing of pixel buffers
//!
//! Resampling goes through the `image` crate's triangle filter. When shrinking,
//! its support widens with the scale ratio so every output pixel averages the
//! whole source area it covers, which keeps large tiles from aliasing.

use crate::imaging::buffer::PixelBuffer;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use image::imageops::{self, FilterType};

/// Filter used for every resize
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Output dimensions when scaling `(rows, cols)` so the shorter edge is `target`
///
/// `scale = min(rows, cols) / target` is applied to both axes, the results are
/// floored, and each edge is clamped to at least `target`.
///
/// # Errors
///
/// Returns [`MosaicError::EmptyImage`] for a zero-area input or
/// [`MosaicError::InvalidParameter`] when `target` is zero
pub fn scaled_dimensions(rows: usize, cols: usize, target: usize) -> Result<(usize, usize)> {
    if target == 0 {
        return Err(invalid_parameter(
            "target",
            &target,
            &"shorter edge length must be positive",
        ));
    }
    if rows == 0 || cols == 0 {
        return Err(MosaicError::EmptyImage {
            operation: "resize",
        });
    }

    let scale = rows.min(cols) as f64 / target as f64;
    let scaled_rows = ((rows as f64 / scale) as usize).max(target);
    let scaled_cols = ((cols as f64 / scale) as usize).max(target);

    Ok((scaled_rows, scaled_cols))
}

/// Resize so the shorter edge equals `target`, preserving aspect ratio
///
/// # Errors
///
/// Returns an error if the buffer is empty or `target` is zero
pub fn resize_shorter_edge(buffer: &PixelBuffer, target: usize) -> Result<PixelBuffer> {
    let (rows, cols) = scaled_dimensions(buffer.rows(), buffer.cols(), target)?;
    resize_exact(buffer, rows, cols)
}

/// Resize to exactly `rows` x `cols`, ignoring aspect ratio
///
/// # Errors
///
/// Returns an error if the buffer is empty or either target dimension is zero
/// or does not fit in `u32`
pub fn resize_exact(buffer: &PixelBuffer, rows: usize, cols: usize) -> Result<PixelBuffer> {
    if buffer.is_empty() {
        return Err(MosaicError::EmptyImage {
            operation: "resize",
        });
    }
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{rows}x{cols}"),
            &"target dimensions must be positive",
        ));
    }
    if buffer.rows() == rows && buffer.cols() == cols {
        return Ok(buffer.clone());
    }

    let width = u32::try_from(cols).map_err(|e| invalid_parameter("cols", &cols, &e))?;
    let height = u32::try_from(rows).map_err(|e| invalid_parameter("rows", &rows, &e))?;

    let source = buffer.to_rgb_image()?;
    let resized = imageops::resize(&source, width, height, RESIZE_FILTER);
    PixelBuffer::from_rgb_image(&resized)
}
