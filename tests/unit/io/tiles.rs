//! Tests for loading a tile bank from a directory

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use photomosaic::MosaicError;
    use photomosaic::io::pattern::TilePattern;
    use photomosaic::io::tiles::{
        TileLoadReport, count_entries, load_numbered_tiles, load_tiles,
    };
    use photomosaic::mosaic::bank::IntensityKey;
    use std::fs;
    use tempfile::TempDir;

    fn png_pattern() -> TilePattern {
        TilePattern::parse("img-{0:05d}.png").unwrap()
    }

    // Tests decoded tiles are resized and bucketed by color
    // Verified by adding tiles without resizing
    #[test]
    fn test_load_tiles_resizes_and_buckets() {
        let temp_dir = TempDir::new().unwrap();
        RgbImage::from_pixel(80, 60, Rgb([200, 10, 10]))
            .save(temp_dir.path().join("img-00000.png"))
            .unwrap();
        RgbImage::from_pixel(20, 20, Rgb([10, 10, 200]))
            .save(temp_dir.path().join("img-00001.png"))
            .unwrap();

        let (bank, report) = load_tiles(temp_dir.path(), &png_pattern(), 50, |_| {}).unwrap();

        assert_eq!(
            report,
            TileLoadReport {
                attempted: 2,
                loaded: 2,
                failed: 0
            }
        );
        assert_eq!(bank.len(), 2);
        let red = bank.tiles_for(&IntensityKey([200, 10, 10]));
        assert_eq!(red.len(), 1);
        assert!(red.iter().all(|tile| tile.dim() == (50, 50, 3)));
    }

    // Tests files outside the pattern and undecodable files are counted as failures
    // Verified by aborting on the first decode failure
    #[test]
    fn test_load_tiles_counts_failures() {
        let temp_dir = TempDir::new().unwrap();
        RgbImage::from_pixel(10, 10, Rgb([1, 2, 3]))
            .save(temp_dir.path().join("img-00000.png"))
            .unwrap();
        fs::write(temp_dir.path().join("img-00001.png"), "garbage").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not a tile").unwrap();

        let mut progress = Vec::new();
        let (bank, report) =
            load_tiles(temp_dir.path(), &png_pattern(), 5, |tried| progress.push(tried)).unwrap();

        assert_eq!(report.attempted, 3);
        assert_eq!(report.loaded, 1);
        assert_eq!(report.failed, 2);
        assert_eq!(bank.tile_count(), 1);
        assert_eq!(progress, vec![1, 2, 3]);
    }

    // Tests a caller-supplied count bounds the indices tried
    // Verified by recounting the directory inside the loader
    #[test]
    fn test_load_numbered_tiles_uses_given_count() {
        let temp_dir = TempDir::new().unwrap();
        for (index, shade) in [10u8, 120, 240].iter().enumerate() {
            RgbImage::from_pixel(6, 6, Rgb([*shade, *shade, *shade]))
                .save(temp_dir.path().join(format!("img-{index:05}.png")))
                .unwrap();
        }

        let mut progress = Vec::new();
        let (bank, report) = load_numbered_tiles(temp_dir.path(), &png_pattern(), 6, 2, |tried| {
            progress.push(tried);
        })
        .unwrap();

        assert_eq!(report.attempted, 2);
        assert_eq!(report.loaded, 2);
        assert_eq!(bank.tile_count(), 2);
        assert_eq!(progress, vec![1, 2]);
    }

    // Tests a directory without any decodable tile aborts distinctly
    // Verified by returning an empty bank instead of an error
    #[test]
    fn test_load_tiles_none_decodable() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "x").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "y").unwrap();

        let result = load_tiles(temp_dir.path(), &png_pattern(), 50, |_| {});

        match result {
            Err(MosaicError::TilesNotLoaded { attempted, .. }) => assert_eq!(attempted, 2),
            other => unreachable!("Expected TilesNotLoaded, got {other:?}"),
        }
    }

    // Tests an empty directory is treated as every tile failing
    // Verified by returning Ok for zero attempts
    #[test]
    fn test_load_tiles_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_tiles(temp_dir.path(), &png_pattern(), 50, |_| {});
        assert!(matches!(result, Err(MosaicError::TilesNotLoaded { .. })));
    }

    // Tests a missing directory is a file system error
    // Verified by treating unreadable directories as empty
    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        assert!(matches!(
            count_entries(&missing),
            Err(MosaicError::FileSystem { .. })
        ));
        assert!(matches!(
            load_tiles(&missing, &png_pattern(), 50, |_| {}),
            Err(MosaicError::FileSystem { .. })
        ));
    }
}
