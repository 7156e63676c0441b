//! Three-channel pixel grids shared by the resizer, tile bank and compositor
//!
//! Pixels are stored as an `(rows, cols, 3)` array of bytes in standard
//! row-major layout, which matches the raw buffer of an [`RgbImage`] and
//! lets whole tiles be stamped with a single slice assignment.

use crate::io::configuration::CHANNELS;
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use ndarray::{Array3, Axis, Slice};

/// A rows x cols grid of 8-bit RGB colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Create a black buffer of the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array3::zeros((rows, cols, CHANNELS)),
        }
    }

    /// Create a buffer where every pixel has the same color
    pub fn filled(rows: usize, cols: usize, color: [u8; 3]) -> Self {
        let mut buffer = Self::new(rows, cols);
        for (c, &value) in color.iter().enumerate() {
            buffer.data.index_axis_mut(Axis(2), c).fill(value);
        }
        buffer
    }

    /// Wrap an existing `(rows, cols, 3)` array
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] if the third axis is not 3 wide
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (_, _, channels) = data.dim();
        if channels != CHANNELS {
            return Err(crate::io::error::invalid_parameter(
                "channels",
                &channels,
                &"pixel buffers carry exactly 3 color channels",
            ));
        }
        Ok(Self { data })
    }

    /// Copy the pixels of a decoded RGB image
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyImage`] if the image has zero area
    pub fn from_rgb_image(image: &RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(MosaicError::EmptyImage {
                operation: "convert",
            });
        }
        let data = Array3::from_shape_vec(
            (height as usize, width as usize, CHANNELS),
            image.as_raw().clone(),
        )
        .map_err(|e| {
            crate::io::error::invalid_parameter("image", &format!("{width}x{height}"), &e)
        })?;
        Ok(Self { data })
    }

    /// Copy the pixels into an RGB image for encoding or filtering
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyImage`] if the buffer has zero area, or
    /// [`MosaicError::InvalidParameter`] if a dimension exceeds `u32`
    pub fn to_rgb_image(&self) -> Result<RgbImage> {
        if self.is_empty() {
            return Err(MosaicError::EmptyImage {
                operation: "convert",
            });
        }
        let width = u32::try_from(self.cols()).map_err(|e| {
            crate::io::error::invalid_parameter("cols", &self.cols(), &e)
        })?;
        let height = u32::try_from(self.rows()).map_err(|e| {
            crate::io::error::invalid_parameter("rows", &self.rows(), &e)
        })?;
        let raw: Vec<u8> = self.data.iter().copied().collect();
        RgbImage::from_raw(width, height, raw).ok_or_else(|| {
            crate::io::error::invalid_parameter(
                "buffer",
                &format!("{width}x{height}"),
                &"raw pixel data does not match the image dimensions",
            )
        })
    }

    /// Number of pixel rows
    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    /// Number of pixel columns
    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    /// Full `(rows, cols, channels)` shape
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Whether the buffer has zero area
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Color at `(row, col)`, or `None` outside the buffer
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 3]> {
        let r = self.data.get((row, col, 0))?;
        let g = self.data.get((row, col, 1))?;
        let b = self.data.get((row, col, 2))?;
        Some([*r, *g, *b])
    }

    /// Overwrite the color at `(row, col)`; positions outside are ignored
    pub fn set_pixel(&mut self, row: usize, col: usize, color: [u8; 3]) {
        for (c, &value) in color.iter().enumerate() {
            if let Some(cell) = self.data.get_mut((row, col, c)) {
                *cell = value;
            }
        }
    }

    /// Per-channel sums over every pixel
    pub fn channel_sums(&self) -> [u64; 3] {
        let mut sums = [0u64; 3];
        for (c, sum) in sums.iter_mut().enumerate() {
            *sum = self
                .data
                .index_axis(Axis(2), c)
                .iter()
                .map(|&v| u64::from(v))
                .sum();
        }
        sums
    }

    /// Copy `tile` into this buffer with its top-left corner at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] if the tile does not fit
    pub fn stamp(&mut self, tile: &Self, row: usize, col: usize) -> Result<()> {
        let row_end = row + tile.rows();
        let col_end = col + tile.cols();
        if row_end > self.rows() || col_end > self.cols() {
            return Err(crate::io::error::invalid_parameter(
                "stamp position",
                &format!("({row}, {col})"),
                &format!(
                    "a {}x{} tile does not fit into a {}x{} buffer",
                    tile.rows(),
                    tile.cols(),
                    self.rows(),
                    self.cols()
                ),
            ));
        }
        self.data
            .slice_each_axis_mut(|axis| match axis.axis {
                Axis(0) => Slice::from(row..row_end),
                Axis(1) => Slice::from(col..col_end),
                _ => Slice::from(..),
            })
            .assign(&tile.data);
        Ok(())
    }
}
