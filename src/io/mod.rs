//! Input/output operations, configuration and error handling

/// Command-line interface and mosaic pipeline
pub mod cli;
/// Compile-time defaults and constants
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Sequential tile filename patterns
pub mod pattern;
/// Terminal progress display
pub mod progress;
/// Copying tile collections under pattern names
pub mod renumber;
/// Tile directory loading
pub mod tiles;
