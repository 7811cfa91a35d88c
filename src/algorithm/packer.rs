//! Multi-pass greedy packing over a row-major cell scan
//!
//! Every pass visits the full cell list in the same order and tries one
//! candidate per cell against the placements accumulated so far, including
//! those from earlier passes. Nothing is ever moved or removed, so a run is
//! a deterministic function of the grid size, the pass list and the random
//! sequence.

use tracing::{debug, trace};

use crate::algorithm::placement::{AttemptOutcome, CollisionIndex, Rejection, attempt_placement};
use crate::algorithm::policy::ShapePolicy;
use crate::algorithm::random::RandomSource;
use crate::analysis::coverage::CoverageReport;
use crate::io::error::Result;
use crate::spatial::geometry::{Dims, Placement, Pos};
use crate::spatial::grid::GridDimensions;

/// Collision lookup strategy for a packing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionStrategy {
    /// Scan all placements per cell; no extra memory
    Linear,
    /// Dense per-cell owner grid; constant-time lookups
    #[default]
    Indexed,
}

/// Outcome counts for one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    /// Position of the pass in the run
    pub pass: usize,
    /// Display form of the pass policy
    pub policy: String,
    /// Cells visited
    pub attempts: usize,
    /// Candidates accepted
    pub placed: usize,
    /// Candidates rejected by collision
    pub rejected: usize,
}

/// Complete result of one packing run
#[derive(Debug, Clone)]
pub struct PackingRun {
    /// Grid that was scanned
    pub dimensions: GridDimensions,
    /// Accepted placements in the order they were made
    pub placements: Vec<Placement>,
    /// Per-pass counts, in pass order
    pub passes: Vec<PassReport>,
    /// Rejected candidates, populated only when the packer records them
    pub rejections: Vec<Rejection>,
}

impl PackingRun {
    /// Discard the reports and keep the placements
    pub fn into_placements(self) -> Vec<Placement> {
        self.placements
    }

    /// Coverage analysis of the placements against the scanned grid
    pub fn coverage(&self) -> CoverageReport {
        CoverageReport::analyze(self.dimensions, &self.placements)
    }
}

/// Greedy packer configured with an ordered list of pass policies
///
/// Full coverage is guaranteed only when the last pass is unit-only; see
/// [`GridPacker::guarantees_full_coverage`]. Any other pass list is valid and
/// may leave cells uncovered.
#[derive(Debug, Clone)]
pub struct GridPacker {
    passes: Vec<ShapePolicy>,
    strategy: CollisionStrategy,
    record_rejections: bool,
}

impl GridPacker {
    /// Create a packer running `passes` in order
    pub fn new(passes: Vec<ShapePolicy>) -> Self {
        Self {
            passes,
            strategy: CollisionStrategy::default(),
            record_rejections: false,
        }
    }

    /// Coarse pass followed by a unit fill pass
    pub fn with_unit_fill(coarse: ShapePolicy) -> Self {
        Self::new(vec![coarse, ShapePolicy::unit()])
    }

    /// Select the collision lookup strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: CollisionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Keep a record of every rejected candidate in the run result
    #[must_use]
    pub fn with_rejection_log(mut self, enabled: bool) -> Self {
        self.record_rejections = enabled;
        self
    }

    /// Configured passes in run order
    pub fn passes(&self) -> &[ShapePolicy] {
        &self.passes
    }

    /// Configured collision strategy
    pub const fn strategy(&self) -> CollisionStrategy {
        self.strategy
    }

    /// Whether the final pass can only draw single cells
    ///
    /// A unit candidate fails only when its own cell is covered, so such a
    /// pass leaves no in-grid cell empty.
    pub fn guarantees_full_coverage(&self) -> bool {
        self.passes.last().is_some_and(ShapePolicy::is_unit_only)
    }

    /// Largest width and height any pass can draw
    pub fn max_extent(&self) -> Dims {
        self.passes.iter().fold(Dims::UNIT, |acc, policy| {
            let extent = policy.max_extent();
            Dims::new(acc.w.max(extent.w), acc.h.max(extent.h))
        })
    }

    /// Pack a grid of `rows x cols` cells
    ///
    /// An empty grid yields an empty run.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is negative or too large.
    /// Validation happens before any placement work.
    pub fn pack<R: RandomSource + ?Sized>(
        &self,
        rows: i64,
        cols: i64,
        random: &mut R,
    ) -> Result<PackingRun> {
        let dimensions = GridDimensions::new(rows, cols)?;
        Ok(self.pack_dimensions(dimensions, random))
    }

    /// Pack an already validated grid
    pub fn pack_dimensions<R: RandomSource + ?Sized>(
        &self,
        dimensions: GridDimensions,
        random: &mut R,
    ) -> PackingRun {
        let cells: Vec<Pos> = dimensions.cells().collect();
        let mut placements = Vec::new();
        let mut rejections = Vec::new();
        let mut passes = Vec::with_capacity(self.passes.len());
        let mut index = match self.strategy {
            CollisionStrategy::Linear => CollisionIndex::Linear,
            CollisionStrategy::Indexed => CollisionIndex::grid(dimensions, self.max_extent()),
        };

        for (pass, policy) in self.passes.iter().enumerate() {
            let mut report = PassReport {
                pass,
                policy: policy.to_string(),
                attempts: 0,
                placed: 0,
                rejected: 0,
            };

            for &pos in &cells {
                report.attempts += 1;
                match attempt_placement(pos, policy, random, &mut placements, &mut index) {
                    AttemptOutcome::Placed(_) => report.placed += 1,
                    AttemptOutcome::Rejected(rejection) => {
                        report.rejected += 1;
                        trace!(
                            pass,
                            anchor = %rejection.pos,
                            dims = %rejection.dims,
                            blocked_cell = %rejection.blocked_cell,
                            blocked_by = rejection.blocked_by,
                            "candidate rejected"
                        );
                        if self.record_rejections {
                            rejections.push(rejection);
                        }
                    }
                }
            }

            debug!(
                pass,
                policy = %policy,
                placed = report.placed,
                rejected = report.rejected,
                "pass complete"
            );
            passes.push(report);
        }

        PackingRun {
            dimensions,
            placements,
            passes,
            rejections,
        }
    }
}

/// Pack a grid with an ordered list of pass policies
///
/// Returns placements in the order they were accepted. Partial coverage is a
/// valid result when `passes` does not end with a unit-only policy.
///
/// # Errors
///
/// Returns `InvalidArgument` if either dimension is negative or too large
pub fn pack_grid<R: RandomSource + ?Sized>(
    rows: i64,
    cols: i64,
    passes: &[ShapePolicy],
    random: &mut R,
) -> Result<Vec<Placement>> {
    GridPacker::new(passes.to_vec())
        .pack(rows, cols, random)
        .map(PackingRun::into_placements)
}
