//! Grid dimensions and row-major cell enumeration
//!
//! Scan order decides which cells get first claim on large blocks, so the
//! enumeration here is part of the packing contract: rows top to bottom,
//! columns left to right within each row.

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_argument};
use crate::spatial::geometry::Pos;

/// Validated grid size in cells
///
/// Either side may be zero; an empty grid simply has no cells to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    rows: u32,
    cols: u32,
}

impl GridDimensions {
    /// Validate a row and column count
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either count is negative or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn new(rows: i64, cols: i64) -> Result<Self> {
        let rows = validate_dimension("rows", rows)?;
        let cols = validate_dimension("cols", cols)?;
        Ok(Self { rows, cols })
    }

    /// Grid that fits a canvas, dropping partial cells at the far edges
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `cell_size` is zero or the resulting grid
    /// is larger than `MAX_GRID_DIMENSION` on either axis
    pub fn from_canvas(width: u32, height: u32, cell_size: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(invalid_argument(
                "cell_size",
                &cell_size,
                &"must be at least one pixel",
            ));
        }
        Self::new(i64::from(height / cell_size), i64::from(width / cell_size))
    }

    /// Number of rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Total cell count
    pub const fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// True when the grid has no cells
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Check whether a cell lies inside the grid
    pub const fn contains(&self, pos: Pos) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    /// Row-major index of an in-grid cell
    pub const fn linear_index(&self, pos: Pos) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.cols as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// Every cell in row-major order
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        enumerate_cells(self.rows, self.cols)
    }
}

fn validate_dimension(parameter: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(invalid_argument(parameter, &value, &"must not be negative"));
    }
    if value > i64::from(MAX_GRID_DIMENSION) {
        return Err(invalid_argument(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(value as u32)
}

/// Enumerate all cell positions row by row
pub fn enumerate_cells(rows: u32, cols: u32) -> impl Iterator<Item = Pos> {
    (0..rows).flat_map(move |y| (0..cols).map(move |x| Pos::new(x, y)))
}
