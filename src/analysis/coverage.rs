//! Coverage and overlap verification for packing results
//!
//! In-grid coverage is tracked in a row-major bitset. Overlaps are checked
//! pairwise on full footprints, so collisions in the overflow region past the
//! grid edge are caught as well.

use std::collections::BTreeMap;

use bitvec::prelude::*;

use crate::spatial::geometry::{Dims, Placement, Pos};
use crate::spatial::grid::GridDimensions;

/// Summary of how a placement set covers its grid
#[derive(Debug, Clone)]
pub struct CoverageReport {
    dimensions: GridDimensions,
    covered: BitVec,
    overlapping_pairs: Vec<(usize, usize)>,
    overflowing: usize,
    size_counts: BTreeMap<Dims, usize>,
}

impl CoverageReport {
    /// Analyze a placement set against a grid
    pub fn analyze(dimensions: GridDimensions, placements: &[Placement]) -> Self {
        let mut covered = bitvec![0; dimensions.cell_count()];
        let mut overflowing = 0;
        let mut size_counts = BTreeMap::new();

        for placement in placements {
            for cell in placement.footprint() {
                if let Some(index) = dimensions.linear_index(cell)
                    && let Some(mut bit) = covered.get_mut(index)
                {
                    *bit = true;
                }
            }
            if placement.right() > dimensions.cols() || placement.bottom() > dimensions.rows() {
                overflowing += 1;
            }
            *size_counts.entry(placement.dims).or_insert(0) += 1;
        }

        let mut overlapping_pairs = Vec::new();
        for (i, a) in placements.iter().enumerate() {
            for (j, b) in placements.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    overlapping_pairs.push((i, j));
                }
            }
        }

        Self {
            dimensions,
            covered,
            overlapping_pairs,
            overflowing,
            size_counts,
        }
    }

    /// Grid the report was computed for
    pub const fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Number of in-grid cells covered by some placement
    pub fn covered_cells(&self) -> usize {
        self.covered.count_ones()
    }

    /// In-grid cells no placement covers, in row-major order
    pub fn uncovered(&self) -> Vec<Pos> {
        let cols = self.dimensions.cols() as usize;
        self.covered
            .iter_zeros()
            .map(|index| Pos::new((index % cols) as u32, (index / cols) as u32))
            .collect()
    }

    /// Every in-grid cell is covered
    pub fn is_complete(&self) -> bool {
        self.covered.all()
    }

    /// Fraction of in-grid cells covered; an empty grid counts as fully covered
    pub fn coverage_ratio(&self) -> f64 {
        let total = self.dimensions.cell_count();
        if total == 0 {
            return 1.0;
        }
        self.covered_cells() as f64 / total as f64
    }

    /// Index pairs of placements whose footprints share a cell
    pub fn overlapping_pairs(&self) -> &[(usize, usize)] {
        &self.overlapping_pairs
    }

    /// No two placements share a cell
    pub fn is_disjoint(&self) -> bool {
        self.overlapping_pairs.is_empty()
    }

    /// Number of placements extending past the right or bottom grid edge
    pub const fn overflowing(&self) -> usize {
        self.overflowing
    }

    /// Placement count per block size
    pub const fn size_counts(&self) -> &BTreeMap<Dims, usize> {
        &self.size_counts
    }
}
