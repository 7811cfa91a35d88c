//! Tests for GIF capture of placements appearing in scan order

#[cfg(test)]
mod tests {
    use irregrid::GridError;
    use irregrid::io::image::RenderStyle;
    use irregrid::io::palette::{ColouredPlacement, Palette};
    use irregrid::io::visualization::VisualizationCapture;
    use irregrid::spatial::geometry::{Dims, Placement, Pos};
    use irregrid::spatial::grid::GridDimensions;
    use tempfile::TempDir;

    fn capture(rows: i64, cols: i64) -> VisualizationCapture {
        let Ok(dimensions) = GridDimensions::new(rows, cols) else {
            unreachable!("valid grid");
        };
        let Ok(palette) = Palette::sunrise() else {
            unreachable!("built-in palette");
        };
        let style = RenderStyle {
            cell_size: 4,
            ..RenderStyle::default()
        };
        VisualizationCapture::new(dimensions, palette, style)
    }

    fn unit_block(x: u32, y: u32) -> ColouredPlacement {
        ColouredPlacement {
            placement: Placement::new(Pos::new(x, y), Dims::UNIT),
            colour: [255, 204, 77, 255],
        }
    }

    // Tests recorded blocks accumulate in order
    // Verified by replacing instead of extending on record_all
    #[test]
    fn test_record() {
        let mut capture = capture(2, 2);
        capture.record(unit_block(0, 0));
        capture.record_all(&[unit_block(1, 0), unit_block(0, 1)]);

        assert_eq!(capture.placement_count(), 3);
    }

    // Tests frame counts with and without frame skipping
    // Verified by skipping frames at delays above the viewer minimum
    #[test]
    fn test_frame_count() {
        let mut capture = capture(3, 3);
        assert_eq!(capture.frame_count(20), 0);

        for y in 0..3 {
            for x in 0..3 {
                capture.record(unit_block(x, y));
            }
        }

        // Blank frame, nine steps, held final frame
        assert_eq!(capture.frame_count(100), 11);
        // Every third step kept at 20ms
        assert_eq!(capture.frame_count(20), 5);
        // Every fourth step kept at 15ms, plus the trailing partial step
        assert_eq!(capture.frame_count(15), 5);
    }

    // Tests GIF export writes a file
    // Verified by skipping the encoder
    #[test]
    fn test_export_gif() {
        let Ok(temp) = TempDir::new() else {
            unreachable!("temp dir");
        };
        let path = temp.path().join("anim").join("grid_animation.gif");
        let mut capture = capture(2, 2);
        capture.record_all(&[unit_block(0, 0), unit_block(1, 1)]);

        assert!(capture.export_gif(&path, 20).is_ok());
        assert!(path.exists());
    }

    // Tests exporting an empty capture is refused
    // Verified by encoding only the blank frame
    #[test]
    fn test_export_empty_capture() {
        let Ok(temp) = TempDir::new() else {
            unreachable!("temp dir");
        };

        let result = capture(2, 2).export_gif(&temp.path().join("empty.gif"), 20);

        assert!(matches!(result, Err(GridError::NothingToRender { .. })));
    }
}
