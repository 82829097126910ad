//! Cropping a decoded image to a region and persisting the result

use crate::grid::CropRegion;
use crate::io::error::{GridCropError, Result};
use image::{DynamicImage, imageops};
use std::path::Path;

/// Crop `image` to `region` in memory
///
/// The result always has exactly the region's extent and the source's pixel
/// format. Parts of the region that fall outside the source are left zeroed
/// (transparent black for images with alpha) rather than clamped away.
///
/// # Errors
///
/// Returns [`GridCropError::DegenerateRegion`] if the region covers no pixels
pub fn crop_region(image: &DynamicImage, region: CropRegion) -> Result<DynamicImage> {
    let (width, height) = region
        .extent()
        .ok_or(GridCropError::DegenerateRegion { region })?;

    let (source_w, source_h) = (image.width(), image.height());
    let visible = CropRegion::new(
        region.left.max(0),
        region.top.max(0),
        region.right.min(i128::from(source_w)),
        region.bottom.min(i128::from(source_h)),
    );

    if visible == region {
        return Ok(image.crop_imm(pixel(region.left), pixel(region.top), width, height));
    }

    tracing::debug!(%region, source_w, source_h, "region extends past source, padding");
    let mut canvas = DynamicImage::new(width, height, image.color());
    if let Some((visible_w, visible_h)) = visible.extent() {
        let piece = image.crop_imm(pixel(visible.left), pixel(visible.top), visible_w, visible_h);
        paste(
            &mut canvas,
            &piece,
            offset(visible.left - region.left),
            offset(visible.top - region.top),
        );
    }
    Ok(canvas)
}

// Callers only pass coordinates already clamped to the source bounds
fn pixel(coordinate: i128) -> u32 {
    u32::try_from(coordinate).unwrap_or_default()
}

fn offset(distance: i128) -> i64 {
    i64::try_from(distance).unwrap_or(i64::MAX)
}

/// Copy `piece` onto `canvas` at `(x, y)` without converting pixel formats
///
/// `DynamicImage` itself only exposes 8-bit RGBA pixels, so matching
/// buffers are pasted directly.
fn paste(canvas: &mut DynamicImage, piece: &DynamicImage, x: i64, y: i64) {
    macro_rules! paste_matching {
        ($($variant:ident),+) => {
            match (canvas, piece) {
                $((DynamicImage::$variant(bottom), DynamicImage::$variant(top)) => {
                    imageops::replace(bottom, top, x, y);
                })+
                (bottom, top) => imageops::replace(bottom, top, x, y),
            }
        };
    }

    paste_matching!(
        ImageLuma8,
        ImageLumaA8,
        ImageRgb8,
        ImageRgba8,
        ImageLuma16,
        ImageLumaA16,
        ImageRgb16,
        ImageRgba16,
        ImageRgb32F,
        ImageRgba32F
    );
}

/// Crop `image` to `region` and write it to `output_path`
///
/// The encoding is chosen from the file extension. An existing file is
/// overwritten.
///
/// # Errors
///
/// Returns an error if:
/// - The region is degenerate
/// - The parent directory of `output_path` does not exist
/// - The image cannot be encoded or written
pub fn extract_and_save(image: &DynamicImage, region: CropRegion, output_path: &Path) -> Result<()> {
    let cropped = crop_region(image, region)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(GridCropError::MissingOutputDir {
            path: parent.to_path_buf(),
        });
    }

    cropped
        .save(output_path)
        .map_err(|e| GridCropError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(%region, path = %output_path.display(), "wrote crop");
    Ok(())
}

/// Create `dir` and any missing parents; succeeds if it already exists
///
/// # Errors
///
/// Returns a file system error if the directory cannot be created
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| GridCropError::FileSystem {
        path: dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })
}
