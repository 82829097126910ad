//! Pixel rectangles for grid cells with an inward margin

use crate::grid::layout::{CellAddress, GridSpec, ImageDimensions};
use std::fmt;

/// Pixel rectangle in source image coordinates
///
/// `left`/`top` are inclusive and `right`/`bottom` exclusive. Coordinates are
/// signed and wide enough for any `u32` address, cell size and margin, so
/// out-of-range cells stay representable. Nothing is clamped, and a region
/// whose right edge does not exceed its left edge (or bottom its top) is
/// degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropRegion {
    /// Left edge, inclusive
    pub left: i128,
    /// Top edge, inclusive
    pub top: i128,
    /// Right edge, exclusive
    pub right: i128,
    /// Bottom edge, exclusive
    pub bottom: i128,
}

impl CropRegion {
    /// Create a region from its four edges
    pub const fn new(left: i128, top: i128, right: i128, bottom: i128) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Signed horizontal extent, negative when the edges are inverted
    pub const fn width(&self) -> i128 {
        self.right - self.left
    }

    /// Signed vertical extent, negative when the edges are inverted
    pub const fn height(&self) -> i128 {
        self.bottom - self.top
    }

    /// True when the region covers no pixels
    pub const fn is_degenerate(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Width and height as pixel counts, or `None` for a degenerate region
    pub fn extent(&self) -> Option<(u32, u32)> {
        if self.is_degenerate() {
            return None;
        }
        let width = u32::try_from(self.width()).ok()?;
        let height = u32::try_from(self.height()).ok()?;
        Some((width, height))
    }

    /// True when every pixel of the region lies inside the image
    pub const fn is_inside(&self, dimensions: ImageDimensions) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= dimensions.width() as i128
            && self.bottom <= dimensions.height() as i128
    }
}

impl fmt::Display for CropRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Compute the pixel rectangle of a grid cell, inset by `margin` on every side
///
/// No validation is performed. An address outside the grid yields a region
/// outside the grid, and a margin of half the cell size or more yields a
/// degenerate region; callers inspect the result with
/// [`CropRegion::is_degenerate`].
pub fn compute_cell_region(
    dimensions: ImageDimensions,
    grid: GridSpec,
    address: CellAddress,
    margin: u32,
) -> CropRegion {
    let (cell_w, cell_h) = grid.cell_size(dimensions);
    let (cell_w, cell_h) = (i128::from(cell_w), i128::from(cell_h));
    let margin = i128::from(margin);

    let left = i128::from(address.col) * cell_w;
    let top = i128::from(address.row) * cell_h;
    let right = left + cell_w;
    let bottom = top + cell_h;

    CropRegion {
        left: left + margin,
        top: top + margin,
        right: right - margin,
        bottom: bottom - margin,
    }
}
