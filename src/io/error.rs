//! Error types for mosaic construction and its file-system glue

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Base image path does not point at an existing file
    BaseImageMissing {
        /// Path that was requested
        path: PathBuf,
    },

    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Not a single tile of the tile directory could be decoded
    TilesNotLoaded {
        /// Directory the tiles were read from
        directory: PathBuf,
        /// Number of tile files that were attempted
        attempted: usize,
    },

    /// Composition was requested against a tile bank without any keys
    EmptyTileBank,

    /// An operation received a pixel buffer with zero area
    EmptyImage {
        /// Operation that rejected the buffer
        operation: &'static str,
    },

    /// A tile does not have the dimensions the bank was created for
    TileDimensionMismatch {
        /// Expected (rows, cols, channels)
        expected: (usize, usize, usize),
        /// Received (rows, cols, channels)
        actual: (usize, usize, usize),
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseImageMissing { path } => {
                write!(
                    f,
                    "Base image '{}' does not exist. Please check the path",
                    path.display()
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::TilesNotLoaded {
                directory,
                attempted,
            } => {
                write!(
                    f,
                    "Image tiles did not load ({attempted} attempted in '{}'). Check the path name and filename format",
                    directory.display()
                )
            }
            Self::EmptyTileBank => {
                write!(f, "Tile bank is empty, no tile can be matched")
            }
            Self::EmptyImage { operation } => {
                write!(f, "Cannot {operation} an image with zero area")
            }
            Self::TileDimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Tile is {}x{}x{} but the bank holds {}x{}x{} tiles",
                    actual.0, actual.1, actual.2, expected.0, expected.1, expected.2
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error bound to a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> MosaicError {
    MosaicError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
