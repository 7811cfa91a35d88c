//! Greedy irregular grid packing for generative block compositions
//!
//! A grid of unit cells is tiled by scanning cells in row-major order and
//! anchoring a randomly sized rectangular block wherever its whole footprint
//! is still free. Runs are built from ordered passes, each drawing candidate
//! sizes from its own policy, so a final unit-cell pass fills whatever the
//! coarser passes left behind.

#![forbid(unsafe_code)]

/// Placement attempts, shape policies and multi-pass orchestration
pub mod algorithm;
/// Coverage and overlap analysis of packing results
pub mod analysis;
/// Input/output operations, rendering and error handling
pub mod io;
/// Cell coordinates, grid dimensions and occupancy tracking
pub mod spatial;

pub use algorithm::packer::{GridPacker, PackingRun, pack_grid};
pub use algorithm::policy::ShapePolicy;
pub use algorithm::random::{RandomSource, SeededRandom};
pub use io::error::{GridError, Result};
pub use spatial::geometry::{Dims, Placement, Pos};
