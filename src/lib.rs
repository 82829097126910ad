//! Grid cropping of sprite and avatar sheets
//!
//! The source image is divided into a uniform grid of `cols * rows` cells.
//! Selected cells are trimmed by a margin on every side, to drop the grid
//! lines between them, and saved as individually named files.

#![forbid(unsafe_code)]

/// Cropping and saving of labelled cell batches
pub mod crop;
/// Grid geometry and crop region arithmetic
pub mod grid;
/// Image dimension queries and pixel color sampling
pub mod inspect;
/// Command line, configuration, error handling and progress display
pub mod io;

pub use io::error::{ErrorKind, GridCropError, Result};
