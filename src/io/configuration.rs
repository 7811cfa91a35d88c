//! Packing constants and runtime configuration defaults

// Shape sets used by the named pass policies
/// Widths drawn by the coarse independent-axis pass
pub const COARSE_WIDTHS: [u32; 2] = [2, 5];
/// Heights drawn by the coarse independent-axis pass
pub const COARSE_HEIGHTS: [u32; 3] = [1, 2, 3];
/// Fixed block shapes drawn by the pool pass, as (width, height)
pub const BLOCK_POOL: [(u32, u32); 5] = [(5, 1), (1, 6), (2, 3), (4, 4), (7, 7)];
/// Per-axis sizes drawn by the naive independent-axis pass
pub const NAIVE_AXIS_SIZES: [u32; 3] = [1, 2, 3];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed rows or columns
pub const MAX_GRID_DIMENSION: u32 = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid rows
pub const DEFAULT_ROWS: u32 = 20;
/// Default grid columns
pub const DEFAULT_COLS: u32 = 20;
/// Default cell edge length in pixels
pub const DEFAULT_CELL_SIZE: u32 = 20;

// Rendering settings
/// Placement outline thickness in pixels
pub const OUTLINE_WIDTH: u32 = 3;
/// Opacity of the cell guideline overlay
pub const GUIDELINE_OPACITY: f32 = 0.2;
/// Largest canvas, in pixels, a render may allocate
pub const MAX_CANVAS_PIXELS: u64 = 64_000_000;

// Output settings
/// Suffix added to animation filenames
pub const ANIMATION_SUFFIX: &str = "_animation";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the delay of the final animation frame
pub const FINAL_FRAME_HOLD: u32 = 25;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
