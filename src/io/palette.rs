//! Palettes and the colour assignment step that follows packing
//!
//! Packing produces geometry only. Colours are drawn here, one per
//! placement, from a palette owned by the caller.

use crate::algorithm::random::{RandomSource, choose};
use crate::io::error::{Result, invalid_palette};
use crate::spatial::geometry::Placement;

/// RGBA colour with 8-bit channels
pub type Rgba = [u8; 4];

const SUNRISE: [&str; 8] = [
    "#fef9c6", "#ffcc4d", "#f5b800", "#56a1c4", "#4464a1", "#ee726b", "#df5f50", "#5a3034",
];

const SUNRISE_OUTLINE: &str = "#404040";

const CARNIVAL: [&str; 13] = [
    "#f2eb8a", "#fed000", "#fc8405", "#ed361a", "#e2f0f3", "#b3dce0", "#4464a1", "#203051",
    "#ffc5c7", "#f398c3", "#cf3895", "#06b4b0", "#4b8a5f",
];

const CARNIVAL_BACKGROUND: &str = "#6d358a";

/// Parse `#rrggbb` or `rrggbb` into an opaque colour
///
/// # Errors
///
/// Returns `InvalidPalette` if the string is not six hex digits
pub fn parse_hex(hex: &str) -> Result<Rgba> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(invalid_palette(&format!("'{hex}' is not a #rrggbb colour")));
    }
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(invalid_palette(&format!("'{hex}' contains non-hex digits")));
    }
    let channel = |from: usize| {
        digits
            .get(from..from + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Ok([r, g, b, 255]),
        _ => Err(invalid_palette(&format!("'{hex}' contains non-hex digits"))),
    }
}

/// Fill colours plus the fixed colours of the surrounding decoration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    fills: Vec<Rgba>,
    background: Rgba,
    guidelines: Rgba,
    outline: Rgba,
}

impl Palette {
    /// Create a palette
    ///
    /// # Errors
    ///
    /// Returns `InvalidPalette` if `fills` is empty
    pub fn new(fills: Vec<Rgba>, background: Rgba, guidelines: Rgba, outline: Rgba) -> Result<Self> {
        if fills.is_empty() {
            return Err(invalid_palette(&"palette requires at least 1 fill colour"));
        }
        Ok(Self {
            fills,
            background,
            guidelines,
            outline,
        })
    }

    /// Create a palette from hex strings
    ///
    /// # Errors
    ///
    /// Returns `InvalidPalette` if any string is malformed or `fills` is empty
    pub fn from_hex(fills: &[&str], background: &str, guidelines: &str, outline: &str) -> Result<Self> {
        let fills = fills.iter().map(|hex| parse_hex(hex)).collect::<Result<Vec<_>>>()?;
        Self::new(
            fills,
            parse_hex(background)?,
            parse_hex(guidelines)?,
            parse_hex(outline)?,
        )
    }

    /// Warm yellows, blues and reds on a dark brown ground
    ///
    /// The ground colour is also a fill, so some blocks blend into it.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in colours; the signature matches `from_hex`
    pub fn sunrise() -> Result<Self> {
        let background = SUNRISE.last().copied().unwrap_or(SUNRISE_OUTLINE);
        let guidelines = SUNRISE.first().copied().unwrap_or(background);
        Self::from_hex(&SUNRISE, background, guidelines, SUNRISE_OUTLINE)
    }

    /// Bright mixed hues on purple, outlined with one of its own fills
    ///
    /// # Errors
    ///
    /// Never fails for the built-in colours; the signature matches `from_hex`
    pub fn carnival<R: RandomSource + ?Sized>(random: &mut R) -> Result<Self> {
        let guidelines = CARNIVAL.first().copied().unwrap_or(CARNIVAL_BACKGROUND);
        let outline = choose(random, &CARNIVAL).copied().unwrap_or(guidelines);
        Self::from_hex(&CARNIVAL, CARNIVAL_BACKGROUND, guidelines, outline)
    }

    /// One of the built-in palettes, chosen uniformly
    ///
    /// # Errors
    ///
    /// Never fails for the built-in colours; the signature matches `from_hex`
    pub fn random_preset<R: RandomSource + ?Sized>(random: &mut R) -> Result<Self> {
        if random.index(2) == 0 {
            Self::sunrise()
        } else {
            Self::carnival(random)
        }
    }

    /// Colours blocks may be filled with
    pub fn fills(&self) -> &[Rgba] {
        &self.fills
    }

    /// Canvas background
    pub const fn background(&self) -> Rgba {
        self.background
    }

    /// Cell guideline colour
    pub const fn guidelines(&self) -> Rgba {
        self.guidelines
    }

    /// Block outline colour
    pub const fn outline(&self) -> Rgba {
        self.outline
    }

    /// Draw one fill colour uniformly
    pub fn pick<R: RandomSource + ?Sized>(&self, random: &mut R) -> Rgba {
        choose(random, &self.fills).copied().unwrap_or(self.background)
    }
}

/// Placement paired with the colour it is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColouredPlacement {
    /// Block geometry
    pub placement: Placement,
    /// Fill colour
    pub colour: Rgba,
}

/// Give every placement a fill colour drawn from `palette`
pub fn assign_colours<R: RandomSource + ?Sized>(
    placements: &[Placement],
    palette: &Palette,
    random: &mut R,
) -> Vec<ColouredPlacement> {
    placements
        .iter()
        .map(|&placement| ColouredPlacement {
            placement,
            colour: palette.pick(random),
        })
        .collect()
}
