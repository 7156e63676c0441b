//! Tile matching and mosaic assembly

/// Average-color multi-map of tiles
pub mod bank;
/// Nearest-color matching and canvas assembly
pub mod compositor;

pub use bank::{IntensityKey, TileBank};
pub use compositor::{RandomSelector, compose};
