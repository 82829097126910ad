//! Error types for loading, cropping, saving and sampling images

use crate::grid::CropRegion;
use std::path::PathBuf;

/// Coarse classification of a [`GridCropError`]
///
/// Callers that only need to decide between aborting a batch and reporting
/// a message match on this instead of the individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source image could not be opened, read or decoded
    SourceLoad,
    /// A crop or save step failed
    Extraction,
    /// A pixel could not be read from a decoded image
    PixelAccess,
    /// A caller-supplied parameter was rejected before any work was done
    Configuration,
}

/// Main error type for all cropping operations
#[derive(Debug, thiserror::Error)]
pub enum GridCropError {
    /// Failed to load source image from filesystem
    #[error("Failed to load image '{}': {source}", .path.display())]
    SourceLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Source image decoded but has no pixels
    #[error("Image '{}' is empty ({width}x{height})", .path.display())]
    EmptySource {
        /// Path to the image file
        path: PathBuf,
        /// Reported width
        width: u32,
        /// Reported height
        height: u32,
    },

    /// Region has zero or negative width or height
    #[error("Degenerate crop region {region}")]
    DegenerateRegion {
        /// The region as computed
        region: CropRegion,
    },

    /// Destination directory for a crop does not exist
    #[error("Output directory '{}' does not exist", .path.display())]
    MissingOutputDir {
        /// Directory that was expected to exist
        path: PathBuf,
    },

    /// Failed to encode or write a cropped image
    #[error("Failed to export image to '{}': {source}", .path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", .path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Pixel sampling failed on an empty or malformed image
    #[error("Pixel access failed: {reason}")]
    PixelAccess {
        /// Description of what made the pixel unreadable
        reason: String,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl GridCropError {
    /// Classify this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SourceLoad { .. } | Self::EmptySource { .. } => ErrorKind::SourceLoad,
            Self::DegenerateRegion { .. }
            | Self::MissingOutputDir { .. }
            | Self::ImageExport { .. }
            | Self::FileSystem { .. } => ErrorKind::Extraction,
            Self::PixelAccess { .. } => ErrorKind::PixelAccess,
            Self::InvalidParameter { .. } => ErrorKind::Configuration,
        }
    }
}

/// Convenience type alias for cropping results
pub type Result<T> = std::result::Result<T, GridCropError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridCropError {
    GridCropError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a pixel access error
pub fn pixel_access_error(reason: &impl ToString) -> GridCropError {
    GridCropError::PixelAccess {
        reason: reason.to_string(),
    }
}
