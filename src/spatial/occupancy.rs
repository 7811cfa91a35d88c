//! Dense owner index for constant-time collision checks
//!
//! Each slot stores the owning placement index plus one, so zero means the
//! cell is free. The index must be sized to include every cell a candidate
//! footprint can reach, including overflow past the grid edge.

use ndarray::Array2;

use crate::spatial::geometry::{Dims, Placement, Pos};
use crate::spatial::grid::GridDimensions;

/// Per-cell record of which placement covers each cell
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    owners: Array2<u32>,
}

impl OccupancyGrid {
    /// Create an empty index with the given extent (rows, cols)
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            owners: Array2::zeros((rows, cols)),
        }
    }

    /// Index large enough for any footprint anchored inside `dimensions`
    ///
    /// `largest` is the biggest width and height any candidate can take.
    pub fn for_grid(dimensions: GridDimensions, largest: Dims) -> Self {
        let overflow_rows = largest.h.saturating_sub(1) as usize;
        let overflow_cols = largest.w.saturating_sub(1) as usize;
        Self::new(
            dimensions.rows() as usize + overflow_rows,
            dimensions.cols() as usize + overflow_cols,
        )
    }

    /// Current extent as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.owners.dim()
    }

    /// Index of the placement covering `pos`, if any
    ///
    /// Cells outside the indexed extent report as free.
    pub fn owner(&self, pos: Pos) -> Option<usize> {
        self.owners
            .get([pos.y as usize, pos.x as usize])
            .copied()
            .filter(|&slot| slot > 0)
            .map(|slot| slot as usize - 1)
    }

    /// Mark the footprint of `placement` as owned by placement `index`
    pub fn claim(&mut self, index: usize, placement: &Placement) {
        let slot = index as u32 + 1;
        for cell in placement.footprint() {
            if let Some(owner) = self.owners.get_mut([cell.y as usize, cell.x as usize]) {
                *owner = slot;
            }
        }
    }

    /// Number of indexed cells currently owned
    pub fn claimed_cells(&self) -> usize {
        self.owners.iter().filter(|&&slot| slot > 0).count()
    }

    /// Release every cell
    pub fn clear(&mut self) {
        self.owners.fill(0);
    }
}
