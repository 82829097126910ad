//! Reference layout constants and the crop job parameter structure

use crate::crop::batch::NamedBatch;
use std::path::PathBuf;

// Grid layout of the avatar sheet
/// Default number of grid columns
pub const DEFAULT_COLS: u32 = 4;
/// Default number of grid rows
pub const DEFAULT_ROWS: u32 = 3;

// Trims grid lines drawn between cells
/// Default inward margin on every cell side, in pixels
pub const DEFAULT_MARGIN: u32 = 10;

// Output settings
/// Default destination directory for cropped cells
pub const DEFAULT_OUTPUT_DIR: &str = "client/public/avatars";
/// Default leading component of every output file name
pub const DEFAULT_FILE_PREFIX: &str = "avatar";
/// Extension (and therefore encoding) of every output file
pub const OUTPUT_EXTENSION: &str = "png";
/// Default source image path when none is given
pub const DEFAULT_SOURCE: &str = "avatars.jpg";

/// Cells of the first avatar batch as (row, col)
pub const WOMAN_CELLS: [(u32, u32); 5] = [(0, 0), (0, 1), (0, 2), (0, 3), (1, 2)];
/// Cells of the second avatar batch as (row, col)
pub const MAN_CELLS: [(u32, u32); 5] = [(1, 0), (1, 1), (2, 0), (2, 1), (2, 2)];

// Progress display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

/// The two labelled batches of the avatar sheet
pub fn default_batches() -> Vec<NamedBatch> {
    vec![
        NamedBatch::new("woman", WOMAN_CELLS),
        NamedBatch::new("man", MAN_CELLS),
    ]
}

/// Everything needed to crop one source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropJob {
    /// Image to decode and crop
    pub source: PathBuf,
    /// Directory receiving the cropped files, created if absent
    pub output_dir: PathBuf,
    /// Number of grid columns
    pub cols: u32,
    /// Number of grid rows
    pub rows: u32,
    /// Inward margin on every cell side, in pixels
    pub margin: u32,
    /// Leading component of every output file name
    pub prefix: String,
    /// Labelled cell selections, processed in order
    pub batches: Vec<NamedBatch>,
}

impl Default for CropJob {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            margin: DEFAULT_MARGIN,
            prefix: DEFAULT_FILE_PREFIX.to_string(),
            batches: default_batches(),
        }
    }
}
