//! Read-only inspection of image files: dimensions and pixel colors

/// Top-left pixel sampling and hex color formatting
pub mod color;
/// Source loading and dimension queries
pub mod metadata;

pub use color::{RgbColor, sample_file_color, sample_top_left_color};
pub use metadata::{SourceImage, load_source, read_dimensions};
