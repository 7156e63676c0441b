//! Mosaic constants and runtime configuration defaults

/// Edge length in pixels of every tile placed into the mosaic
pub const TILE_SIZE: usize = 50;

/// Length in pixels of the base image's shorter edge after normalization
pub const BASE_SHORT_EDGE: usize = 100;

/// Number of color channels carried by every pixel buffer
pub const CHANNELS: usize = 3;

// Default values for configurable parameters
/// Base image used when none is given
pub const DEFAULT_IMAGE_PATH: &str = "input.jpg";

/// Tile directory used when none is given
pub const DEFAULT_TILE_DIRECTORY: &str = "./tiles/";

/// Tile filename format used when none is given
pub const DEFAULT_TILE_FORMAT: &str = "img-{0:05d}.jpg";

// Output settings
/// File the finished mosaic is always written to
pub const OUTPUT_FILENAME: &str = "out1.jpg";

/// Suffix of the directory that receives renumbered tiles
pub const RENAMED_SUFFIX: &str = "_renamed";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
