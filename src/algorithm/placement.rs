//! Collision tests and single-cell greedy placement attempts

use crate::algorithm::policy::ShapePolicy;
use crate::algorithm::random::RandomSource;
use crate::spatial::geometry::{Dims, Placement, Pos, footprint};
use crate::spatial::grid::GridDimensions;
use crate::spatial::occupancy::OccupancyGrid;

/// Check whether no placement covers `pos`
pub fn is_empty(pos: Pos, placements: &[Placement]) -> bool {
    !placements.iter().any(|placement| placement.covers(pos))
}

/// Index of the first placement covering `pos`
pub fn first_collision(pos: Pos, placements: &[Placement]) -> Option<usize> {
    placements.iter().position(|placement| placement.covers(pos))
}

/// Diagnostic record of a candidate that could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// Anchor cell the candidate was tried at
    pub pos: Pos,
    /// Candidate size
    pub dims: Dims,
    /// First footprint cell found occupied
    pub blocked_cell: Pos,
    /// Index of the placement occupying `blocked_cell`
    pub blocked_by: usize,
}

/// Result of one placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Candidate accepted and appended at this index
    Placed(usize),
    /// Candidate collided with an existing placement
    Rejected(Rejection),
}

impl AttemptOutcome {
    /// True when the candidate was accepted
    pub const fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }
}

/// Collision lookup used while a packing run accumulates placements
#[derive(Debug, Clone)]
pub enum CollisionIndex {
    /// Scan every existing placement for each footprint cell
    Linear,
    /// Look cells up in a dense owner grid
    Grid(OccupancyGrid),
}

impl CollisionIndex {
    /// Dense index for a grid whose candidates never exceed `largest`
    pub fn grid(dimensions: GridDimensions, largest: Dims) -> Self {
        Self::Grid(OccupancyGrid::for_grid(dimensions, largest))
    }

    /// Index of the placement covering `pos`, if any
    pub fn first_collision(&self, pos: Pos, placements: &[Placement]) -> Option<usize> {
        match self {
            Self::Linear => first_collision(pos, placements),
            Self::Grid(grid) => grid.owner(pos),
        }
    }

    fn record(&mut self, index: usize, placement: &Placement) {
        if let Self::Grid(grid) = self {
            grid.claim(index, placement);
        }
    }
}

/// Try to anchor a block of size `dims` at `pos`
///
/// The candidate is accepted only if every footprint cell is free, including
/// cells past the grid edge; footprints are never clipped or rejected for
/// overflowing. Accepted placements are appended to `placements` and
/// registered with `index`. A rejection leaves both untouched.
pub fn try_place(
    pos: Pos,
    dims: Dims,
    placements: &mut Vec<Placement>,
    index: &mut CollisionIndex,
) -> AttemptOutcome {
    for cell in footprint(pos, dims) {
        if let Some(blocked_by) = index.first_collision(cell, placements) {
            return AttemptOutcome::Rejected(Rejection {
                pos,
                dims,
                blocked_cell: cell,
                blocked_by,
            });
        }
    }

    let placement = Placement::new(pos, dims);
    let slot = placements.len();
    index.record(slot, &placement);
    placements.push(placement);
    AttemptOutcome::Placed(slot)
}

/// Draw one candidate from `policy` and try to anchor it at `pos`
///
/// A candidate is drawn even when `pos` is already covered, so the random
/// sequence consumed depends only on the number of cells visited.
pub fn attempt_placement<R: RandomSource + ?Sized>(
    pos: Pos,
    policy: &ShapePolicy,
    random: &mut R,
    placements: &mut Vec<Placement>,
    index: &mut CollisionIndex,
) -> AttemptOutcome {
    let dims = policy.draw(random);
    try_place(pos, dims, placements, index)
}
