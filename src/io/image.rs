//! Flat raster rendering of coloured placements and PNG export
//!
//! The canvas spans exactly the grid. Blocks that overflow the right or
//! bottom edge are truncated by the canvas; their outline is only drawn on
//! edges that fall inside it.

use std::path::Path;

use image::{Pixel, Rgba, RgbaImage};

use crate::io::configuration::{
    DEFAULT_CELL_SIZE, GUIDELINE_OPACITY, MAX_CANVAS_PIXELS, OUTLINE_WIDTH,
};
use crate::io::error::{GridError, Result, invalid_argument};
use crate::io::palette::{ColouredPlacement, Palette};
use crate::spatial::grid::GridDimensions;

/// Pixel-level drawing options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Cell edge length in pixels
    pub cell_size: u32,
    /// Block outline thickness in pixels; zero disables outlines
    pub outline_width: u32,
    /// Draw thin cell borders over the blocks
    pub guidelines: bool,
    /// Opacity of the guideline overlay in `[0, 1]`
    pub guideline_opacity: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            outline_width: OUTLINE_WIDTH,
            guidelines: true,
            guideline_opacity: GUIDELINE_OPACITY,
        }
    }
}

impl RenderStyle {
    /// Canvas size in pixels for a grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either side overflows `u32` or the
    /// canvas would hold more than `MAX_CANVAS_PIXELS` pixels
    pub fn canvas_size(&self, dimensions: GridDimensions) -> Result<(u32, u32)> {
        let width = dimensions.cols().checked_mul(self.cell_size);
        let height = dimensions.rows().checked_mul(self.cell_size);
        let (Some(width), Some(height)) = (width, height) else {
            return Err(invalid_argument(
                "cell_size",
                &self.cell_size,
                &format!(
                    "a {}x{} grid at this size overflows the canvas",
                    dimensions.cols(),
                    dimensions.rows()
                ),
            ));
        };
        let pixels = u64::from(width) * u64::from(height);
        if pixels > MAX_CANVAS_PIXELS {
            return Err(invalid_argument(
                "cell_size",
                &self.cell_size,
                &format!("{width}x{height} canvas exceeds {MAX_CANVAS_PIXELS} pixels"),
            ));
        }
        Ok((width, height))
    }
}

/// Blank canvas filled with the palette background
///
/// # Errors
///
/// Returns `InvalidArgument` if the canvas would be too large
pub fn blank_canvas(
    dimensions: GridDimensions,
    palette: &Palette,
    style: &RenderStyle,
) -> Result<RgbaImage> {
    let (width, height) = style.canvas_size(dimensions)?;
    Ok(RgbaImage::from_pixel(width, height, Rgba(palette.background())))
}

/// Fill and outline one block, clipped to the canvas
pub fn draw_block(
    canvas: &mut RgbaImage,
    block: &ColouredPlacement,
    outline: Rgba<u8>,
    style: &RenderStyle,
) {
    let cell = style.cell_size;
    let placement = &block.placement;
    let left = placement.pos.x.saturating_mul(cell);
    let top = placement.pos.y.saturating_mul(cell);
    let right = placement.right().saturating_mul(cell);
    let bottom = placement.bottom().saturating_mul(cell);
    let band = style.outline_width;
    let fill = Rgba(block.colour);

    for y in top..bottom.min(canvas.height()) {
        for x in left..right.min(canvas.width()) {
            let on_outline = x < left.saturating_add(band)
                || y < top.saturating_add(band)
                || x.saturating_add(band) >= right
                || y.saturating_add(band) >= bottom;
            if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                *pixel = if on_outline { outline } else { fill };
            }
        }
    }
}

/// Blend one-pixel cell borders over the whole canvas
pub fn draw_guidelines(canvas: &mut RgbaImage, colour: Rgba<u8>, cell_size: u32, opacity: f32) {
    if cell_size == 0 {
        return;
    }
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    let [r, g, b, _] = colour.0;
    let overlay = Rgba([r, g, b, alpha]);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        if x % cell_size == 0 || y % cell_size == 0 {
            pixel.blend(&overlay);
        }
    }
}

/// Render coloured placements onto a fresh canvas
///
/// # Errors
///
/// Returns `InvalidArgument` if the canvas would be too large
pub fn render_placements(
    dimensions: GridDimensions,
    blocks: &[ColouredPlacement],
    palette: &Palette,
    style: &RenderStyle,
) -> Result<RgbaImage> {
    let mut canvas = blank_canvas(dimensions, palette, style)?;
    let outline = Rgba(palette.outline());
    for block in blocks {
        draw_block(&mut canvas, block, outline, style);
    }
    if style.guidelines {
        draw_guidelines(
            &mut canvas,
            Rgba(palette.guidelines()),
            style.cell_size,
            style.guideline_opacity,
        );
    }
    Ok(canvas)
}

/// Save a rendered canvas as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The canvas has zero width or height
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(GridError::NothingToRender {
            reason: "canvas has no pixels".to_string(),
        });
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas.save(output_path).map_err(|e| GridError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
