//! Frame capture and GIF generation showing placements appear in scan order

use std::path::Path;

use image::{Delay, Frame, Rgba, RgbaImage};

use crate::io::configuration::{FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{GridError, Result};
use crate::io::image::{RenderStyle, blank_canvas, draw_block, draw_guidelines};
use crate::io::palette::{ColouredPlacement, Palette};
use crate::spatial::grid::GridDimensions;

/// Records coloured placements for replay as an animation
///
/// Each recorded block becomes one animation step, drawn on top of all
/// earlier ones in the order recorded.
pub struct VisualizationCapture {
    dimensions: GridDimensions,
    palette: Palette,
    style: RenderStyle,
    blocks: Vec<ColouredPlacement>,
}

impl VisualizationCapture {
    /// Create an empty capture for a grid
    pub fn new(dimensions: GridDimensions, palette: Palette, style: RenderStyle) -> Self {
        Self {
            dimensions,
            palette,
            style,
            blocks: Vec::with_capacity(dimensions.cell_count()),
        }
    }

    /// Record one block
    pub fn record(&mut self, block: ColouredPlacement) {
        self.blocks.push(block);
    }

    /// Record a batch of blocks in order
    pub fn record_all(&mut self, blocks: &[ColouredPlacement]) {
        self.blocks.extend_from_slice(blocks);
    }

    /// Number of recorded blocks
    pub fn placement_count(&self) -> usize {
        self.blocks.len()
    }

    /// Export the recorded blocks as a GIF with automatic frame skipping
    ///
    /// Requested delays below what viewers reliably honour are raised to
    /// `VIEWER_MIN_FRAME_DELAY_MS`, and intermediate steps are dropped so the
    /// animation keeps its apparent speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No blocks were recorded
    /// - The canvas would exceed `MAX_CANVAS_PIXELS`
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.blocks.is_empty() {
            return Err(GridError::NothingToRender {
                reason: "no placements captured for visualization".to_string(),
            });
        }

        let frames = self.generate_frames(frame_delay_ms)?;

        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| GridError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GridError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Number of frames `export_gif` would encode for a requested delay
    pub fn frame_count(&self, frame_delay_ms: u32) -> usize {
        if self.blocks.is_empty() {
            return 0;
        }
        let skip = skip_factor(frame_delay_ms);
        // Blank first frame, one per kept step, a trailing partial step, and the held final frame
        1 + self.blocks.len() / skip + usize::from(self.blocks.len() % skip != 0) + 1
    }

    fn generate_frames(&self, frame_delay_ms: u32) -> Result<Vec<Frame>> {
        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip = skip_factor(frame_delay_ms);
        let outline = Rgba(self.palette.outline());

        let mut canvas = blank_canvas(self.dimensions, &self.palette, &self.style)?;
        let mut frames = vec![self.render_frame(&canvas, delay_ms)];

        for (step, block) in self.blocks.iter().enumerate() {
            draw_block(&mut canvas, block, outline, &self.style);
            if (step + 1) % skip == 0 {
                frames.push(self.render_frame(&canvas, delay_ms));
            }
        }

        if self.blocks.len() % skip != 0 {
            frames.push(self.render_frame(&canvas, delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(self.render_frame(&canvas, delay_ms.saturating_mul(FINAL_FRAME_HOLD)));

        Ok(frames)
    }

    fn render_frame(&self, canvas: &RgbaImage, delay_ms: u32) -> Frame {
        let mut image = canvas.clone();
        if self.style.guidelines {
            draw_guidelines(
                &mut image,
                Rgba(self.palette.guidelines()),
                self.style.cell_size,
                self.style.guideline_opacity,
            );
        }
        Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }
}

fn skip_factor(frame_delay_ms: u32) -> usize {
    if frame_delay_ms == 0 {
        VIEWER_MIN_FRAME_DELAY_MS as usize
    } else if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
    } else {
        1
    }
}
