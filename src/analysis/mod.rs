//! Analysis of packing results

/// Coverage, overlap and size statistics
pub mod coverage;
