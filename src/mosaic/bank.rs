//! Tiles bucketed by their average color
//!
//! The bank is an ordered multi-map: each distinct [`IntensityKey`] owns a
//! growable list of tiles, and keys are enumerated in the order they were
//! first inserted. That order stays fixed for the lifetime of the bank, so a
//! key's index in [`TileBank::keys`] can be paired with the key itself during
//! a composition pass.

use crate::imaging::buffer::PixelBuffer;
use crate::io::configuration::CHANNELS;
use crate::io::error::{MosaicError, Result};
use std::collections::HashMap;

/// Per-channel mean color of a tile, truncated to integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntensityKey(pub [u32; 3]);

impl IntensityKey {
    /// Compute the key of a buffer as `channel sum / pixel count`
    ///
    /// An empty buffer yields the all-zero key.
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        let pixel_count = (buffer.rows() * buffer.cols()) as u64;
        if pixel_count == 0 {
            return Self([0; 3]);
        }
        let sums = buffer.channel_sums();
        Self(sums.map(|sum| (sum / pixel_count) as u32))
    }

    /// Squared Euclidean distance to a pixel color
    ///
    /// Exact integer form of [`IntensityKey::distance`]; both order keys identically.
    pub fn distance_squared(&self, color: [u8; 3]) -> u64 {
        self.0
            .iter()
            .zip(color.iter())
            .map(|(&key, &value)| {
                let delta = i64::from(key) - i64::from(value);
                delta.unsigned_abs().pow(2)
            })
            .sum()
    }

    /// Euclidean distance to a pixel color
    pub fn distance(&self, color: [u8; 3]) -> f64 {
        (self.distance_squared(color) as f64).sqrt()
    }
}

/// Multi-map from average color to every tile sharing it
#[derive(Debug, Clone)]
pub struct TileBank {
    tile_size: usize,
    keys: Vec<IntensityKey>,
    buckets: Vec<Vec<PixelBuffer>>,
    index: HashMap<IntensityKey, usize>,
}

impl TileBank {
    /// Create an empty bank accepting `tile_size` x `tile_size` tiles
    pub fn new(tile_size: usize) -> Self {
        Self {
            tile_size,
            keys: Vec::new(),
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a tile to the bucket of its average color
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::TileDimensionMismatch`] unless the tile is
    /// exactly `tile_size` x `tile_size` x 3
    pub fn add(&mut self, tile: PixelBuffer) -> Result<IntensityKey> {
        let expected = (self.tile_size, self.tile_size, CHANNELS);
        let actual = tile.dim();
        if actual != expected {
            return Err(MosaicError::TileDimensionMismatch { expected, actual });
        }

        let key = IntensityKey::from_buffer(&tile);
        if let Some(bucket) = self
            .index
            .get(&key)
            .and_then(|&position| self.buckets.get_mut(position))
        {
            bucket.push(tile);
        } else {
            self.index.insert(key, self.keys.len());
            self.keys.push(key);
            self.buckets.push(vec![tile]);
        }

        Ok(key)
    }

    /// Distinct keys in first-insertion order
    pub fn keys(&self) -> &[IntensityKey] {
        &self.keys
    }

    /// Tiles stored under `key`, empty if the key is absent
    pub fn tiles_for(&self, key: &IntensityKey) -> &[PixelBuffer] {
        self.index
            .get(key)
            .and_then(|&position| self.buckets.get(position))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Tiles stored under the key at `position` of [`TileBank::keys`]
    pub fn tiles_at(&self, position: usize) -> &[PixelBuffer] {
        self.buckets
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct keys
    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the bank holds no keys at all
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Total number of tiles across all buckets
    pub fn tile_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Edge length every tile in the bank has
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Drop every tile and key
    pub fn clear(&mut self) {
        self.keys.clear();
        self.buckets.clear();
        self.index.clear();
    }
}
