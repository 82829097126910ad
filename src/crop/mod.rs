//! Cropping grid cells out of a decoded image and saving them

/// Batch processing of labelled cell selections
pub mod batch;
/// Single-region crop and save primitives
pub mod extract;

pub use batch::{BatchObserver, GridCropper, NamedBatch, SilentObserver, run_crop_job};
pub use extract::{crop_region, ensure_output_dir, extract_and_save};
