//! Pixel buffers and the resampling applied before composition
//!
//! This module contains imaging functionality including:
//! - The three-channel pixel grid shared by every stage
//! - Aspect-preserving and exact resizing

/// Three-channel pixel grid backed by an `ndarray` array
pub mod buffer;
/// Shorter-edge normalization and exact resizing
pub mod resize;

pub use buffer::PixelBuffer;
