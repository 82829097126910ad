//! Reading the background color of an image from its top-left pixel

use crate::io::error::{GridCropError, Result, pixel_access_error};
use image::{DynamicImage, GenericImageView};
use std::fmt;
use std::path::Path;

/// 8-bit RGB color, alpha discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl RgbColor {
    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Sample the pixel at `(0, 0)`
///
/// Higher bit depths are scaled down to 8 bits per channel.
///
/// # Errors
///
/// Returns a pixel access error if the image has zero width or height, or
/// if its pixel format has fewer than three color channels
pub fn sample_top_left_color(image: &DynamicImage) -> Result<RgbColor> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(pixel_access_error(&format!(
            "image has no pixels ({width}x{height})"
        )));
    }

    let color_type = image.color();
    if color_type.channel_count() < 3 {
        return Err(pixel_access_error(&format!(
            "{color_type:?} pixels have {} channel(s), need at least 3",
            color_type.channel_count()
        )));
    }

    let [r, g, b, _] = image.get_pixel(0, 0).0;
    Ok(RgbColor { r, g, b })
}

/// Load the image at `path` and sample its top-left pixel
///
/// # Errors
///
/// Returns a source load error if the file cannot be decoded, otherwise
/// the errors of [`sample_top_left_color`]
pub fn sample_file_color<P: AsRef<Path>>(path: P) -> Result<RgbColor> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|e| GridCropError::SourceLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    sample_top_left_color(&image)
}
