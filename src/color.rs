use std::collections::{hash_map::Entry::*, HashMap};
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::Style;

const PALETTES_JSON: &str = include_str!("palettes.json");

/// An opaque 24-bit color, the only kind the output raster stores.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color with straight (non-premultiplied) alpha, for translucent fills composited onto the
/// opaque canvas.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: u8,
}

impl Rgb {
    /// Canvas background, laid down before any style draws.
    pub const BACKGROUND: Rgb = Rgb::new(0x0a, 0x0a, 0x0f);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// A near-black gray with a slight blue lift, used for the dim radial backdrops.
    pub fn dim_gray(level: u8, blue_lift: u8) -> Self {
        Rgb::new(level, level, level.saturating_add(blue_lift))
    }

    pub fn with_alpha(self, a: u8) -> Rgba {
        Rgba { rgb: self, a }
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        rgb.with_alpha(0xff)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0}")]
    Length(usize),
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

impl FromStr for Rgb {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return Err(ColorParseError::Length(digits.len()));
        }
        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)?;
        let [r, g, b] = bytes;
        Ok(Rgb::new(r, g, b))
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", hex::encode([self.r, self.g, self.b]))
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WirePaletteDb {
    palettes: Vec<WirePalette>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WirePalette {
    style: String,
    colors: Vec<String>,
}

/// Default palettes, one per style. A request without its own palette draws from these.
#[derive(Debug, Clone)]
pub struct PaletteDb {
    palettes: HashMap<Style, Vec<Rgb>>,
}

#[derive(Debug)]
pub enum WireFormatError {
    UnknownStyle { name: String },
    DuplicatePalette { style: Style },
    InvalidColor { style: Style, color: String },
    MissingPalette { style: Style },
}

impl PaletteDb {
    pub fn from_bundle() -> Self {
        let wire: WirePaletteDb =
            serde_json::from_str(PALETTES_JSON).expect("bundled data is invalid JSON");
        PaletteDb::from_wire(wire).expect("bundled data is not a valid palette table")
    }

    pub fn from_wire(wire: WirePaletteDb) -> Result<Self, WireFormatError> {
        let mut palettes = HashMap::with_capacity(wire.palettes.len());
        for palette in wire.palettes {
            let style: Style = palette
                .style
                .parse()
                .map_err(|_| WireFormatError::UnknownStyle {
                    name: palette.style.clone(),
                })?;
            let colors = palette
                .colors
                .into_iter()
                .map(|color| {
                    color
                        .parse::<Rgb>()
                        .map_err(|_| WireFormatError::InvalidColor { style, color })
                })
                .collect::<Result<Vec<Rgb>, WireFormatError>>()?;
            match palettes.entry(style) {
                Occupied(_) => return Err(WireFormatError::DuplicatePalette { style }),
                Vacant(v) => v.insert(colors),
            };
        }

        for &style in Style::ALL {
            match palettes.get(&style) {
                Some(colors) if colors.len() >= style.min_palette_len() => {}
                _ => return Err(WireFormatError::MissingPalette { style }),
            }
        }

        Ok(PaletteDb { palettes })
    }

    pub fn palette(&self, style: Style) -> &[Rgb] {
        self.palettes.get(&style).map(Vec::as_slice).unwrap_or(&[])
    }
}
