//! Tests for shorter-edge normalization and exact resizing

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::imaging::buffer::PixelBuffer;
    use photomosaic::imaging::resize::{resize_exact, resize_shorter_edge, scaled_dimensions};

    // Tests that the scale comes from the shorter edge
    // Verified by using max(rows, cols) for the scale
    #[test]
    fn test_scaled_dimensions_uses_shorter_edge() {
        assert_eq!(scaled_dimensions(200, 400, 100).unwrap(), (100, 200));
        assert_eq!(scaled_dimensions(400, 200, 100).unwrap(), (200, 100));
        assert_eq!(scaled_dimensions(300, 300, 100).unwrap(), (100, 100));
    }

    // Tests that non-integral scales still leave the shorter edge at the target
    // Verified by removing the clamp to the target length
    #[test]
    fn test_scaled_dimensions_shorter_edge_exact() {
        for (rows, cols) in [(333, 517), (101, 999), (640, 480), (37, 91)] {
            let (out_rows, out_cols) = scaled_dimensions(rows, cols, 100).unwrap();
            assert_eq!(out_rows.min(out_cols), 100, "input {rows}x{cols}");
            assert!(out_rows >= 100 && out_cols >= 100);
        }
    }

    // Tests that upscaling follows the same formula
    // Verified by returning the input dimensions for small images
    #[test]
    fn test_scaled_dimensions_upscales_small_images() {
        assert_eq!(scaled_dimensions(50, 75, 100).unwrap(), (100, 150));
    }

    // Tests invalid inputs are rejected with distinct errors
    // Verified by removing the zero target guard
    #[test]
    fn test_scaled_dimensions_invalid_input() {
        assert!(matches!(
            scaled_dimensions(0, 10, 100),
            Err(MosaicError::EmptyImage { .. })
        ));
        assert!(matches!(
            scaled_dimensions(10, 10, 0),
            Err(MosaicError::InvalidParameter { .. })
        ));
    }

    // Tests the resized buffer has the computed dimensions
    // Verified by swapping width and height in the filter call
    #[test]
    fn test_resize_shorter_edge_output_dimensions() {
        let buffer = PixelBuffer::filled(200, 400, [10, 20, 30]);
        let resized = resize_shorter_edge(&buffer, 100).unwrap();

        assert_eq!(resized.rows(), 100);
        assert_eq!(resized.cols(), 200);
        assert_eq!(resized.pixel(50, 100), Some([10, 20, 30]));
    }

    // Tests that downscaling averages instead of sampling single pixels
    // Verified by switching the filter to nearest neighbour
    #[test]
    fn test_resize_exact_averages_stripes() {
        let mut buffer = PixelBuffer::new(100, 100);
        for row in 0..100 {
            for col in (0..100).step_by(2) {
                buffer.set_pixel(row, col, [200, 200, 200]);
            }
        }

        let resized = resize_exact(&buffer, 10, 10).unwrap();
        let [r, g, b] = resized.pixel(5, 5).unwrap();

        for channel in [r, g, b] {
            assert!((80..=120).contains(&channel), "got {channel}");
        }
    }

    // Tests that empty buffers and zero targets fail
    // Verified by removing the emptiness check
    #[test]
    fn test_resize_exact_rejects_empty() {
        assert!(resize_exact(&PixelBuffer::new(0, 0), 50, 50).is_err());
        assert!(resize_exact(&PixelBuffer::new(5, 5), 0, 50).is_err());
    }

    // Tests that matching dimensions return an identical copy
    // Verified by always running the filter
    #[test]
    fn test_resize_exact_same_size_is_copy() {
        let mut buffer = PixelBuffer::new(3, 3);
        buffer.set_pixel(1, 1, [255, 0, 0]);
        assert_eq!(resize_exact(&buffer, 3, 3).unwrap(), buffer);
    }
}
