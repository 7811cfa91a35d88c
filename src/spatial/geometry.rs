//! Cell coordinates, block dimensions and placement footprints
//!
//! All rectangles use half-open ranges on both axes: a placement anchored at
//! `(x, y)` with size `w x h` covers columns `x..x + w` and rows `y..y + h`.
//! A cell on the exact right or bottom edge belongs to the next block over.

use std::fmt;

/// Integer cell coordinate, `x` counting columns and `y` counting rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column index
    pub x: u32,
    /// Row index
    pub y: u32,
}

impl Pos {
    /// Create a cell position
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Block width and height in cell units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dims {
    /// Width in cells
    pub w: u32,
    /// Height in cells
    pub h: u32,
}

impl Dims {
    /// Single-cell block
    pub const UNIT: Self = Self { w: 1, h: 1 };

    /// Create block dimensions
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Number of cells in the block
    pub const fn area(self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Both sides are at least one cell
    pub const fn is_positive(self) -> bool {
        self.w > 0 && self.h > 0
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Rectangular block anchored at its top-left cell
///
/// Placements carry geometry only. Colour and any other presentation data are
/// attached afterwards by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Top-left anchor cell
    pub pos: Pos,
    /// Size in cells
    pub dims: Dims,
}

impl Placement {
    /// Create a placement
    pub const fn new(pos: Pos, dims: Dims) -> Self {
        Self { pos, dims }
    }

    /// First column past the right edge
    pub const fn right(&self) -> u32 {
        self.pos.x.saturating_add(self.dims.w)
    }

    /// First row past the bottom edge
    pub const fn bottom(&self) -> u32 {
        self.pos.y.saturating_add(self.dims.h)
    }

    /// Check whether this placement covers a cell
    pub const fn covers(&self, target: Pos) -> bool {
        target.x >= self.pos.x
            && target.x < self.right()
            && target.y >= self.pos.y
            && target.y < self.bottom()
    }

    /// Check whether two footprints share at least one cell
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }

    /// Every cell this placement covers
    pub fn footprint(self) -> impl Iterator<Item = Pos> {
        footprint(self.pos, self.dims)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.dims, self.pos)
    }
}

/// Cells of the rectangle anchored at `pos`, column by column
///
/// Cells past the nominal grid edge are included; footprints are never clipped.
pub fn footprint(pos: Pos, dims: Dims) -> impl Iterator<Item = Pos> {
    let rows = pos.y..pos.y.saturating_add(dims.h);
    (pos.x..pos.x.saturating_add(dims.w))
        .flat_map(move |x| rows.clone().map(move |y| Pos::new(x, y)))
}
