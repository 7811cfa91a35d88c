//! Command-line interface for packing, colouring and rendering grids

use crate::algorithm::packer::{CollisionStrategy, GridPacker};
use crate::algorithm::policy::ShapePolicy;
use crate::algorithm::random::SeededRandom;
use crate::io::configuration::{
    ANIMATION_SUFFIX, DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED,
    GIF_FRAME_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::image::{RenderStyle, export_png, render_placements};
use crate::io::palette::{Palette, assign_colours};
use crate::io::progress::ProgressManager;
use crate::io::visualization::VisualizationCapture;
use crate::spatial::grid::GridDimensions;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Named shape policies selectable per pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PassPreset {
    /// Widths 2 or 5, heights 1 to 3, drawn independently
    Coarse,
    /// Fixed pool of strips, slabs and large squares
    Blocks,
    /// Widths and heights 1 to 3, drawn independently
    Naive,
    /// Single cells only
    Unit,
}

impl PassPreset {
    /// Shape policy for this preset
    ///
    /// # Errors
    ///
    /// Propagates validation of the built-in shape sets
    pub fn policy(self) -> Result<ShapePolicy> {
        match self {
            Self::Coarse => ShapePolicy::coarse(),
            Self::Blocks => ShapePolicy::blocks(),
            Self::Naive => ShapePolicy::naive(),
            Self::Unit => Ok(ShapePolicy::unit()),
        }
    }
}

/// Palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PalettePreset {
    /// Warm yellows, blues and reds on dark brown
    Sunrise,
    /// Bright mixed hues on purple
    Carnival,
    /// Either palette, chosen per variant
    Random,
}

impl PalettePreset {
    /// Build the palette, drawing from `random` where the preset needs it
    ///
    /// # Errors
    ///
    /// Propagates parsing of the built-in palette colours
    pub fn palette(self, random: &mut SeededRandom) -> Result<Palette> {
        match self {
            Self::Sunrise => Palette::sunrise(),
            Self::Carnival => Palette::carnival(random),
            Self::Random => Palette::random_preset(random),
        }
    }
}

#[derive(Parser)]
#[command(name = "irregrid")]
#[command(
    author,
    version,
    about = "Tile a grid with randomly sized blocks and render it"
)]
/// Command-line arguments for the grid packing tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Grid columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: u32,

    /// Derive a square grid from this canvas size in pixels instead of rows/cols
    #[arg(long)]
    pub canvas: Option<u32>,

    /// Cell edge length in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Pass policies in run order
    #[arg(
        short,
        long = "pass",
        value_enum,
        value_delimiter = ',',
        default_values_t = [PassPreset::Coarse, PassPreset::Unit]
    )]
    pub passes: Vec<PassPreset>,

    /// Palette used to colour blocks
    #[arg(long, value_enum, default_value_t = PalettePreset::Random)]
    pub palette: PalettePreset,

    /// Number of variants to render with consecutive seeds
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Check collisions by scanning placements instead of the occupancy index
    #[arg(long)]
    pub linear_scan: bool,

    /// Omit the cell guideline overlay
    #[arg(long)]
    pub no_guidelines: bool,

    /// Also write an animated GIF of placements appearing in scan order
    #[arg(short, long)]
    pub animate: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Grid size implied by the arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a zero cell size with `--canvas`, or for
    /// oversized dimensions
    pub fn grid_dimensions(&self) -> Result<GridDimensions> {
        match self.canvas {
            Some(canvas) => GridDimensions::from_canvas(canvas, canvas, self.cell_size),
            None => GridDimensions::new(i64::from(self.rows), i64::from(self.cols)),
        }
    }

    /// Packer configured from the pass and strategy flags
    ///
    /// # Errors
    ///
    /// Propagates shape policy validation
    pub fn packer(&self) -> Result<GridPacker> {
        let passes = self
            .passes
            .iter()
            .map(|preset| preset.policy())
            .collect::<Result<Vec<_>>>()?;
        let strategy = if self.linear_scan {
            CollisionStrategy::Linear
        } else {
            CollisionStrategy::Indexed
        };
        Ok(GridPacker::new(passes).with_strategy(strategy))
    }

    /// Rendering options from the flags
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            cell_size: self.cell_size,
            guidelines: !self.no_guidelines,
            ..RenderStyle::default()
        }
    }
}

/// Packs, colours and renders one or more variants
pub struct BatchRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render every requested variant
    ///
    /// # Errors
    ///
    /// Returns an error if arguments fail validation or any export fails
    pub fn run(&mut self) -> Result<()> {
        let dimensions = self.cli.grid_dimensions()?;
        let packer = self.cli.packer()?;
        let style = self.cli.render_style();
        style.canvas_size(dimensions)?;

        if !packer.guarantees_full_coverage() {
            warn!("last pass is not unit-only; some cells may stay uncovered");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for offset in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(offset as u64);
            self.render_variant(&packer, dimensions, &style, seed)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn render_variant(
        &mut self,
        packer: &GridPacker,
        dimensions: GridDimensions,
        style: &RenderStyle,
        seed: u64,
    ) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_variant(seed);
        }

        let mut random = SeededRandom::new(seed);
        let run = packer.pack_dimensions(dimensions, &mut random);
        let coverage = run.coverage();

        info!(
            seed,
            placements = run.placements.len(),
            overflowing = coverage.overflowing(),
            coverage = coverage.coverage_ratio(),
            "packed {}x{} grid",
            dimensions.cols(),
            dimensions.rows()
        );
        if !coverage.is_complete() {
            warn!(
                seed,
                uncovered = coverage.uncovered().len(),
                "grid left partially uncovered"
            );
        }

        let palette = self.cli.palette.palette(&mut random)?;
        let blocks = assign_colours(&run.placements, &palette, &mut random);

        let canvas = render_placements(dimensions, &blocks, &palette, style)?;
        let output_path = self.output_path(seed);
        export_png(&canvas, &output_path)?;
        info!(path = %output_path.display(), "wrote image");

        if self.cli.animate {
            let mut capture = VisualizationCapture::new(dimensions, palette, *style);
            capture.record_all(&blocks);
            let animation_path = Self::animation_path(&output_path);
            capture.export_gif(&animation_path, GIF_FRAME_DELAY_MS)?;
            info!(path = %animation_path.display(), "wrote animation");
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_variant();
        }

        Ok(())
    }

    /// Output path for a variant; batches add the seed to the file stem
    pub fn output_path(&self, seed: u64) -> PathBuf {
        if self.cli.count <= 1 {
            return self.cli.output.clone();
        }
        let stem = self.cli.output.file_stem().unwrap_or_default();
        let extension = self.cli.output.extension().unwrap_or_default();
        let name = if extension.is_empty() {
            format!("{}_{seed}.png", stem.to_string_lossy())
        } else {
            format!(
                "{}_{seed}.{}",
                stem.to_string_lossy(),
                extension.to_string_lossy()
            )
        };
        sibling(&self.cli.output, name)
    }

    /// GIF path written next to an image
    pub fn animation_path(image_path: &Path) -> PathBuf {
        let stem = image_path.file_stem().unwrap_or_default();
        let name = format!("{}{ANIMATION_SUFFIX}.gif", stem.to_string_lossy());
        sibling(image_path, name)
    }
}

fn sibling(path: &Path, name: String) -> PathBuf {
    if let Some(parent) = path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
