//! Grid geometry
//!
//! This module contains the pure arithmetic of the cropper:
//! - Image dimensions and uniform grid partitions
//! - Cell addresses
//! - Margin-inset crop regions

/// Image dimensions, grid specifications and cell addresses
pub mod layout;
/// Crop regions and their computation from grid cells
pub mod region;

pub use layout::{CellAddress, GridSpec, ImageDimensions};
pub use region::{CropRegion, compute_cell_region};
