//! Tests for in-memory cropping, saving crops to disk and output directory creation

#[cfg(test)]
mod tests {
    use gridcrop::crop::{crop_region, ensure_output_dir, extract_and_save};
    use gridcrop::grid::CropRegion;
    use gridcrop::{ErrorKind, GridCropError};
    use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb, RgbImage, Rgba};
    use tempfile::TempDir;

    // Every pixel encodes its own coordinates so crops can be located
    fn coordinate_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 7])
        }))
    }

    // Tests an interior crop has the region size and source pixels
    // Verified by offsetting the crop origin by one pixel
    #[test]
    fn test_crop_region_inside() {
        let img = coordinate_image(400, 300);
        let cropped = crop_region(&img, CropRegion::new(10, 20, 90, 80)).unwrap();

        assert_eq!(cropped.dimensions(), (80, 60));
        assert_eq!(cropped.get_pixel(0, 0), Rgba([10, 20, 7, 255]));
        assert_eq!(cropped.get_pixel(79, 59), Rgba([89, 79, 7, 255]));
    }

    // Tests a region past the right edge keeps its size and zero-fills
    // Verified by clamping the region to the source instead
    #[test]
    fn test_crop_region_past_edge_is_padded() {
        let img = coordinate_image(400, 300);
        let cropped = crop_region(&img, CropRegion::new(390, 0, 410, 10)).unwrap();

        assert_eq!(cropped.dimensions(), (20, 10));
        assert_eq!(cropped.get_pixel(5, 3), Rgba([139, 3, 7, 255]));
        assert_eq!(cropped.get_pixel(15, 3), Rgba([0, 0, 0, 255]));
    }

    // Tests a region starting left of the source shifts source pixels right
    // Verified by ignoring the negative origin
    #[test]
    fn test_crop_region_negative_origin() {
        let img = coordinate_image(20, 20);
        let cropped = crop_region(&img, CropRegion::new(-5, -5, 5, 5)).unwrap();

        assert_eq!(cropped.dimensions(), (10, 10));
        assert_eq!(cropped.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(cropped.get_pixel(5, 5), Rgba([0, 0, 7, 255]));
        assert_eq!(cropped.get_pixel(9, 9), Rgba([4, 4, 7, 255]));
    }

    // Tests padding keeps 16-bit samples identical to an in-bounds crop
    // Verified by pasting through the 8-bit RGBA view of the source
    #[test]
    fn test_crop_region_padding_keeps_bit_depth() {
        let img = DynamicImage::ImageRgb16(ImageBuffer::from_pixel(4, 4, Rgb([1000_u16, 2000, 3000])));

        let inside = crop_region(&img, CropRegion::new(2, 2, 4, 4)).unwrap();
        let padded = crop_region(&img, CropRegion::new(2, 2, 6, 6)).unwrap();

        let inside = inside.as_rgb16().unwrap();
        let padded = padded.as_rgb16().unwrap();
        assert_eq!(inside.get_pixel(1, 1), &Rgb([1000, 2000, 3000]));
        assert_eq!(padded.get_pixel(1, 1), inside.get_pixel(1, 1));
        assert_eq!(padded.get_pixel(3, 3), &Rgb([0, 0, 0]));
    }

    // Tests a region entirely outside the source is a blank canvas of its size
    // Verified by cropping the intersection instead
    #[test]
    fn test_crop_region_fully_outside() {
        let img = coordinate_image(40, 30);
        let cropped = crop_region(&img, CropRegion::new(100, 100, 110, 105)).unwrap();

        assert_eq!(cropped.dimensions(), (10, 5));
        assert_eq!(cropped.get_pixel(9, 4), Rgba([0, 0, 0, 255]));
    }

    // Tests zero-area and inverted regions are reported, not cropped
    // Verified by treating zero width as a one pixel crop
    #[test]
    fn test_crop_region_degenerate() {
        let img = coordinate_image(40, 30);

        for region in [CropRegion::new(5, 5, 5, 10), CropRegion::new(10, 10, 4, 4)] {
            let err = crop_region(&img, region).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Extraction);
            match err {
                GridCropError::DegenerateRegion { region: reported } => {
                    assert_eq!(reported, region);
                }
                other => unreachable!("Expected DegenerateRegion, got {other}"),
            }
        }
    }

    // Tests a crop is written and decodes back to the region size
    // Verified by disabling the save call
    #[test]
    fn test_extract_and_save_writes_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cell.png");
        let img = coordinate_image(400, 300);

        extract_and_save(&img, CropRegion::new(110, 10, 190, 90), &path).unwrap();

        let saved = image::open(&path).unwrap();
        assert_eq!(saved.dimensions(), (80, 80));
        assert_eq!(saved.get_pixel(0, 0), Rgba([110, 10, 7, 255]));
    }

    // Tests an existing file is replaced
    // Verified by refusing to overwrite
    #[test]
    fn test_extract_and_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cell.png");
        let img = coordinate_image(100, 100);

        extract_and_save(&img, CropRegion::new(0, 0, 50, 50), &path).unwrap();
        extract_and_save(&img, CropRegion::new(0, 0, 20, 10), &path).unwrap();

        assert_eq!(image::open(&path).unwrap().dimensions(), (20, 10));
    }

    // Tests a missing destination directory fails instead of being created
    // Verified by creating parents inside extract_and_save
    #[test]
    fn test_extract_and_save_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent").join("cell.png");
        let img = coordinate_image(100, 100);

        let err = extract_and_save(&img, CropRegion::new(0, 0, 10, 10), &path).unwrap_err();
        assert!(matches!(err, GridCropError::MissingOutputDir { .. }));
        assert_eq!(err.kind(), ErrorKind::Extraction);
        assert!(!path.exists());
    }

    // Tests a degenerate region writes nothing
    // Verified by saving before checking the region
    #[test]
    fn test_extract_and_save_degenerate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cell.png");
        let img = coordinate_image(100, 100);

        let result = extract_and_save(&img, CropRegion::new(10, 10, 10, 10), &path);
        assert!(matches!(result, Err(GridCropError::DegenerateRegion { .. })));
        assert!(!path.exists());
    }

    // Tests an unknown output extension is an export error
    // Verified by defaulting to PNG for unknown extensions
    #[test]
    fn test_extract_and_save_unknown_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cell.notanimage");
        let img = coordinate_image(100, 100);

        let err = extract_and_save(&img, CropRegion::new(0, 0, 10, 10), &path).unwrap_err();
        assert!(matches!(err, GridCropError::ImageExport { .. }));
        assert!(err.to_string().contains("cell.notanimage"));
    }

    // Tests directory creation is idempotent and creates parents
    // Verified by using create_dir instead of create_dir_all
    #[test]
    fn test_ensure_output_dir_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("client").join("public").join("avatars");

        ensure_output_dir(&dir).unwrap();
        ensure_output_dir(&dir).unwrap();

        assert!(dir.is_dir());
    }

    // Tests a file in the way of the directory is a file system error
    // Verified by ignoring create_dir_all errors
    #[test]
    fn test_ensure_output_dir_blocked_by_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("avatars");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = ensure_output_dir(&blocker).unwrap_err();
        assert!(matches!(
            err,
            GridCropError::FileSystem {
                operation: "create directory",
                ..
            }
        ));
    }
}
