//! Image dimensions, grid partitions and cell addresses
//!
//! A grid divides an image into `cols * rows` equal cells using floor division.
//! Remainder pixels along the right and bottom edges belong to no cell.

use crate::io::error::{Result, invalid_parameter};
use image::GenericImageView;
use std::fmt;
use std::str::FromStr;

/// Width and height of a decoded source image, both positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    width: u32,
    height: u32,
}

impl ImageDimensions {
    /// Create dimensions, rejecting a zero width or height
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if either side is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(invalid_parameter("width", &width, &"must be positive"));
        }
        if height == 0 {
            return Err(invalid_parameter("height", &height, &"must be positive"));
        }
        Ok(Self { width, height })
    }

    /// Read the dimensions of an already decoded image
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if the image has no pixels
    pub fn of_image(image: &impl GenericImageView) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height)
    }

    /// Image width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Uniform partition of an image into `cols` by `rows` cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    cols: u32,
    rows: u32,
}

impl GridSpec {
    /// Create a grid, rejecting zero columns or rows
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if either count is zero
    pub fn new(cols: u32, rows: u32) -> Result<Self> {
        if cols == 0 {
            return Err(invalid_parameter("cols", &cols, &"must be positive"));
        }
        if rows == 0 {
            return Err(invalid_parameter("rows", &rows, &"must be positive"));
        }
        Ok(Self { cols, rows })
    }

    /// Number of columns
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells in the grid
    pub const fn cell_count(&self) -> u64 {
        self.cols as u64 * self.rows as u64
    }

    /// Cell width and height for an image, using floor division
    pub const fn cell_size(&self, dimensions: ImageDimensions) -> (u32, u32) {
        (dimensions.width / self.cols, dimensions.height / self.rows)
    }

    /// Every cell address in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellAddress> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| CellAddress::new(row, col)))
    }
}

impl fmt::Display for GridSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Zero-indexed cell position within a grid
///
/// Addresses are not checked against any grid when constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index, counted from the top
    pub row: u32,
    /// Column index, counted from the left
    pub col: u32,
}

impl CellAddress {
    /// Create an address from a row and column
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Whether this address names a cell of `grid`
    pub const fn is_within(&self, grid: GridSpec) -> bool {
        self.row < grid.rows && self.col < grid.cols
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}

impl FromStr for CellAddress {
    type Err = crate::io::error::GridCropError;

    /// Parse `ROW:COL`, e.g. `1:2`
    fn from_str(s: &str) -> Result<Self> {
        let (row, col) = s
            .split_once(':')
            .ok_or_else(|| invalid_parameter("cell", &s, &"expected ROW:COL"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|e| invalid_parameter("cell", &s, &format!("bad row: {e}")))?;
        let col = col
            .trim()
            .parse()
            .map_err(|e| invalid_parameter("cell", &s, &format!("bad column: {e}")))?;
        Ok(Self { row, col })
    }
}

impl From<(u32, u32)> for CellAddress {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}
