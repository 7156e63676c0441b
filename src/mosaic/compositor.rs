//! Assembles the mosaic canvas from a base image and a tile bank
//!
//! Every base pixel becomes one `tile_size` x `tile_size` cell. The cell's
//! color is matched against every key of the bank by a linear scan, which
//! makes a pass O(rows * cols * keys). Callers with large collections should
//! shrink them before building the bank.

use crate::imaging::buffer::PixelBuffer;
use crate::io::error::{MosaicError, Result};
use crate::mosaic::bank::{IntensityKey, TileBank};
use rand::seq::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};

/// Seedable random source for picking a tile inside a bucket
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uniformly pick one element, `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

/// Index of the key closest to `color`
///
/// Ties resolve to the first minimal index in `keys` order.
pub fn nearest_key_index(keys: &[IntensityKey], color: [u8; 3]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (index, key) in keys.iter().enumerate() {
        let distance = key.distance_squared(color);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Build the mosaic canvas for `base` from the tiles in `bank`
///
/// # Errors
///
/// Returns [`MosaicError::EmptyTileBank`] if the bank has no keys, or
/// [`MosaicError::EmptyImage`] if the base image has zero area
pub fn compose(
    base: &PixelBuffer,
    bank: &TileBank,
    selector: &mut RandomSelector,
) -> Result<PixelBuffer> {
    compose_with_progress(base, bank, selector, |_| {})
}

/// Build the mosaic canvas, calling `on_row` with the number of finished rows
///
/// # Errors
///
/// Returns [`MosaicError::EmptyTileBank`] if the bank has no keys, or
/// [`MosaicError::EmptyImage`] if the base image has zero area
pub fn compose_with_progress<F>(
    base: &PixelBuffer,
    bank: &TileBank,
    selector: &mut RandomSelector,
    mut on_row: F,
) -> Result<PixelBuffer>
where
    F: FnMut(usize),
{
    if bank.is_empty() {
        return Err(MosaicError::EmptyTileBank);
    }
    if base.is_empty() {
        return Err(MosaicError::EmptyImage {
            operation: "compose",
        });
    }

    // Indices into this snapshot are paired with buckets for the whole pass
    let keys = bank.keys();
    let tile_size = bank.tile_size();
    let (rows, cols) = (base.rows(), base.cols());
    let mut canvas = PixelBuffer::new(rows * tile_size, cols * tile_size);

    for i in 0..rows {
        for j in 0..cols {
            let color = base.pixel(i, j).ok_or(MosaicError::EmptyImage {
                operation: "compose",
            })?;
            let tile = nearest_key_index(keys, color)
                .and_then(|index| selector.choose(bank.tiles_at(index)))
                .ok_or(MosaicError::EmptyTileBank)?;
            canvas.stamp(tile, i * tile_size, j * tile_size)?;
        }
        on_row(i + 1);
    }

    Ok(canvas)
}
