//! Spatial data structures for grid packing
//!
//! This module contains spatial-related functionality including:
//! - Cell positions, block sizes and placement footprints
//! - Grid dimensions and row-major scan order
//! - Dense occupancy tracking

/// Positions, dimensions and placement rectangles
pub mod geometry;
/// Grid dimensions and cell enumeration
pub mod grid;
/// Per-cell owner index for collision checks
pub mod occupancy;

pub use geometry::{Dims, Placement, Pos};
pub use grid::GridDimensions;
