//! Source image loading and header inspection

use crate::grid::ImageDimensions;
use crate::io::error::{GridCropError, Result};
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Decoded source image together with its validated dimensions
///
/// Read-only once loaded.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    image: DynamicImage,
    dimensions: ImageDimensions,
}

impl SourceImage {
    /// Path the image was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoded pixel data
    pub const fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Width and height of the decoded image
    pub const fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    /// Give up the path and dimensions, keeping the pixels
    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

/// Decode the image at `path`
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The file is not a decodable image
/// - The image has zero width or height
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref().to_path_buf();
    let image = image::open(&path).map_err(|e| GridCropError::SourceLoad {
        path: path.clone(),
        source: e,
    })?;
    let dimensions = checked_dimensions(&path, image.width(), image.height())?;

    Ok(SourceImage {
        path,
        image,
        dimensions,
    })
}

/// Read the dimensions of the image at `path` from its header only
///
/// # Errors
///
/// Returns an error if the file cannot be read, its format is not
/// recognised, or it reports a zero width or height
pub fn read_dimensions<P: AsRef<Path>>(path: P) -> Result<ImageDimensions> {
    let path = path.as_ref();
    let (width, height) =
        image::image_dimensions(path).map_err(|e| GridCropError::SourceLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
    checked_dimensions(path, width, height)
}

fn checked_dimensions(path: &Path, width: u32, height: u32) -> Result<ImageDimensions> {
    if width == 0 || height == 0 {
        return Err(GridCropError::EmptySource {
            path: path.to_path_buf(),
            width,
            height,
        });
    }
    ImageDimensions::new(width, height)
}
