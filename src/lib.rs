//! Photomosaic construction from a base image and a collection of tiles
//!
//! Tiles are bucketed by their average color. The base image is shrunk so
//! every pixel becomes one mosaic cell, and each cell is replaced by a random
//! tile from the bucket whose color is closest to the pixel.

#![forbid(unsafe_code)]

/// Pixel buffers and resizing
pub mod imaging;
/// Input/output operations and error handling
pub mod io;
/// Tile bank and mosaic composition
pub mod mosaic;

pub use io::error::{MosaicError, Result};
