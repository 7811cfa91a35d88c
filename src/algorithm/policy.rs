use std::fmt;

use crate::algorithm::random::{RandomSource, choose};
use crate::io::configuration::{
    BLOCK_POOL, COARSE_HEIGHTS, COARSE_WIDTHS, MAX_GRID_DIMENSION, NAIVE_AXIS_SIZES,
};
use crate::io::error::{Result, invalid_argument};
use crate::spatial::geometry::Dims;

/// How a policy draws candidate sizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyKind {
    /// One `(w, h)` pair drawn uniformly from a fixed set
    Pool(Vec<Dims>),
    /// Width and height drawn independently from their own value sets
    ///
    /// Combined sizes are generally not equally likely, so this is kept
    /// separate from `Pool` rather than expanded into one.
    IndependentAxis {
        /// Candidate widths
        widths: Vec<u32>,
        /// Candidate heights
        heights: Vec<u32>,
    },
}

/// Rule for drawing the candidate block size tried at each cell
///
/// Construction validates the shape sets, so every policy in hand can only
/// produce positive dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapePolicy {
    kind: PolicyKind,
}

impl ShapePolicy {
    /// Policy drawing uniformly from a fixed set of `(width, height)` pairs
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the set is empty or any side is zero or
    /// larger than `MAX_GRID_DIMENSION`
    pub fn pool(shapes: impl IntoIterator<Item = (u32, u32)>) -> Result<Self> {
        let shapes: Vec<Dims> = shapes.into_iter().map(|(w, h)| Dims::new(w, h)).collect();
        if shapes.is_empty() {
            return Err(invalid_argument("pool", &"[]", &"needs at least one shape"));
        }
        if let Some(bad) = shapes.iter().find(|dims| !dims.is_positive()) {
            return Err(invalid_argument(
                "pool",
                bad,
                &"shape sides must be at least one cell",
            ));
        }
        if let Some(huge) = shapes
            .iter()
            .find(|dims| dims.w > MAX_GRID_DIMENSION || dims.h > MAX_GRID_DIMENSION)
        {
            return Err(invalid_argument(
                "pool",
                huge,
                &format!("shape sides must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
        Ok(Self {
            kind: PolicyKind::Pool(shapes),
        })
    }

    /// Policy drawing width and height independently
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either set is empty, contains zero or
    /// contains a size above `MAX_GRID_DIMENSION`
    pub fn independent(widths: &[u32], heights: &[u32]) -> Result<Self> {
        validate_axis("widths", widths)?;
        validate_axis("heights", heights)?;
        Ok(Self {
            kind: PolicyKind::IndependentAxis {
                widths: widths.to_vec(),
                heights: heights.to_vec(),
            },
        })
    }

    /// Single-cell blocks only, used as the final fill pass
    pub fn unit() -> Self {
        Self {
            kind: PolicyKind::Pool(vec![Dims::UNIT]),
        }
    }

    /// Wide, short blocks drawn per axis
    ///
    /// # Errors
    ///
    /// Never fails for the built-in sets; the signature matches the other constructors
    pub fn coarse() -> Result<Self> {
        Self::independent(&COARSE_WIDTHS, &COARSE_HEIGHTS)
    }

    /// Fixed pool of strips, slabs and large squares
    ///
    /// # Errors
    ///
    /// Never fails for the built-in pool; the signature matches the other constructors
    pub fn blocks() -> Result<Self> {
        Self::pool(BLOCK_POOL)
    }

    /// Small blocks with each side drawn from one to three cells
    ///
    /// # Errors
    ///
    /// Never fails for the built-in sets; the signature matches the other constructors
    pub fn naive() -> Result<Self> {
        Self::independent(&NAIVE_AXIS_SIZES, &NAIVE_AXIS_SIZES)
    }

    /// Drawing rule of this policy
    pub const fn kind(&self) -> &PolicyKind {
        &self.kind
    }

    /// Draw one candidate size
    pub fn draw<R: RandomSource + ?Sized>(&self, random: &mut R) -> Dims {
        match &self.kind {
            PolicyKind::Pool(shapes) => choose(random, shapes).copied().unwrap_or(Dims::UNIT),
            PolicyKind::IndependentAxis { widths, heights } => {
                let w = choose(random, widths).copied().unwrap_or(1);
                let h = choose(random, heights).copied().unwrap_or(1);
                Dims::new(w, h)
            }
        }
    }

    /// Whether every candidate this policy can draw is a single cell
    ///
    /// A final unit-only pass fills every cell earlier passes left empty.
    pub fn is_unit_only(&self) -> bool {
        match &self.kind {
            PolicyKind::Pool(shapes) => shapes.iter().all(|&dims| dims == Dims::UNIT),
            PolicyKind::IndependentAxis { widths, heights } => {
                widths.iter().all(|&w| w == 1) && heights.iter().all(|&h| h == 1)
            }
        }
    }

    /// Largest width and largest height any draw can produce
    pub fn max_extent(&self) -> Dims {
        match &self.kind {
            PolicyKind::Pool(shapes) => shapes.iter().fold(Dims::UNIT, |acc, dims| {
                Dims::new(acc.w.max(dims.w), acc.h.max(dims.h))
            }),
            PolicyKind::IndependentAxis { widths, heights } => Dims::new(
                widths.iter().copied().max().unwrap_or(1),
                heights.iter().copied().max().unwrap_or(1),
            ),
        }
    }
}

impl fmt::Display for ShapePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PolicyKind::Pool(shapes) => {
                let listed: Vec<String> = shapes.iter().map(ToString::to_string).collect();
                write!(f, "pool[{}]", listed.join(", "))
            }
            PolicyKind::IndependentAxis { widths, heights } => {
                write!(f, "axes{widths:?}x{heights:?}")
            }
        }
    }
}

fn validate_axis(parameter: &'static str, values: &[u32]) -> Result<()> {
    if values.is_empty() {
        return Err(invalid_argument(parameter, &"[]", &"needs at least one size"));
    }
    if values.contains(&0) {
        return Err(invalid_argument(
            parameter,
            &format!("{values:?}"),
            &"sizes must be at least one cell",
        ));
    }
    if values.iter().any(|&value| value > MAX_GRID_DIMENSION) {
        return Err(invalid_argument(
            parameter,
            &format!("{values:?}"),
            &format!("sizes must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}
