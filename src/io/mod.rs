//! Input/output operations, rendering and error handling

/// Command-line interface and batch runner
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Palettes and colour assignment
pub mod palette;
/// Batch progress display
pub mod progress;
/// Animated GIF capture
pub mod visualization;
