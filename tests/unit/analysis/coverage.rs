//! Tests for coverage and overlap verification

#[cfg(test)]
mod tests {
    use irregrid::analysis::coverage::CoverageReport;
    use irregrid::spatial::geometry::{Dims, Placement, Pos};
    use irregrid::spatial::grid::GridDimensions;

    fn grid(rows: i64, cols: i64) -> GridDimensions {
        let Ok(dimensions) = GridDimensions::new(rows, cols) else {
            unreachable!("valid grid");
        };
        dimensions
    }

    // Tests uncovered cells are listed in row-major order
    // Verified by computing positions column-major from the bit index
    #[test]
    fn test_uncovered_row_major() {
        let placements = [Placement::new(Pos::new(0, 0), Dims::new(2, 1))];

        let report = CoverageReport::analyze(grid(2, 3), &placements);

        assert_eq!(
            report.uncovered(),
            vec![
                Pos::new(2, 0),
                Pos::new(0, 1),
                Pos::new(1, 1),
                Pos::new(2, 1)
            ]
        );
        assert_eq!(report.covered_cells(), 2);
        assert!(!report.is_complete());
        assert!((report.coverage_ratio() - 2.0 / 6.0).abs() < f64::EPSILON);
    }

    // Tests overflow counts toward the overflow tally but not coverage
    // Verified by wrapping overflow cells onto the next row
    #[test]
    fn test_overflow_not_counted_as_coverage() {
        let placements = [
            Placement::new(Pos::new(0, 0), Dims::new(3, 1)),
            Placement::new(Pos::new(3, 0), Dims::new(3, 1)),
        ];

        let report = CoverageReport::analyze(grid(2, 5), &placements);

        assert_eq!(report.covered_cells(), 5);
        assert_eq!(report.overflowing(), 1);
        assert_eq!(report.uncovered().len(), 5);
    }

    // Tests overlaps are found pairwise including past the grid edge
    // Verified by checking overlaps on in-grid cells only
    #[test]
    fn test_overlap_detection() {
        let placements = [
            Placement::new(Pos::new(0, 0), Dims::new(2, 2)),
            Placement::new(Pos::new(2, 0), Dims::new(3, 1)),
            Placement::new(Pos::new(3, 0), Dims::new(2, 2)),
            Placement::new(Pos::new(1, 1), Dims::UNIT),
        ];

        let report = CoverageReport::analyze(grid(2, 3), &placements);

        assert_eq!(report.overlapping_pairs(), &[(0, 3), (1, 2)]);
        assert!(!report.is_disjoint());
    }

    // Tests block sizes are tallied per dimension
    // Verified by keying the tally on area
    #[test]
    fn test_size_counts() {
        let placements = [
            Placement::new(Pos::new(0, 0), Dims::new(2, 1)),
            Placement::new(Pos::new(0, 1), Dims::new(1, 2)),
            Placement::new(Pos::new(2, 0), Dims::new(2, 1)),
        ];

        let report = CoverageReport::analyze(grid(3, 4), &placements);

        assert_eq!(report.size_counts().get(&Dims::new(2, 1)), Some(&2));
        assert_eq!(report.size_counts().get(&Dims::new(1, 2)), Some(&1));
        assert_eq!(report.size_counts().len(), 2);
    }

    // Tests an empty grid is trivially complete
    // Verified by dividing by the zero cell count
    #[test]
    fn test_empty_grid() {
        let report = CoverageReport::analyze(grid(0, 0), &[]);

        assert!(report.is_complete());
        assert!(report.is_disjoint());
        assert!((report.coverage_ratio() - 1.0).abs() < f64::EPSILON);
        assert_eq!(report.dimensions(), grid(0, 0));
    }
}
