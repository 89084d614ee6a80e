use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::color::{PaletteDb, Rgb};
use crate::error::{GenerationError, Result};
use crate::style::Style;

pub const DEFAULT_COMPLEXITY: f64 = 0.7;

/// Clock-derived seeds are reduced modulo this, keeping them short enough to type back in.
const CLOCK_SEED_MODULUS: u128 = 1_000_000;

/// A request for one artwork, in the JSON shape `{"style": .., "seed": .., "parameters": {..}}`.
/// Everything except `style` may be omitted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GenerationRequest {
    pub style: Style,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub parameters: Parameters,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Parameters {
    /// Seed sent inside `parameters`, as the HTTP API accepts it. A top-level `seed` wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<f64>,
    /// Colors as `#rrggbb` strings. Validated only when the request is resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<String>>,
}

impl GenerationRequest {
    pub fn new(style: Style) -> Self {
        GenerationRequest {
            style,
            seed: None,
            parameters: Parameters::default(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn complexity(mut self, complexity: f64) -> Self {
        self.parameters.complexity = Some(complexity);
        self
    }

    pub fn palette<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters.palette = Some(colors.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedSource {
    /// Supplied by the caller; the artwork can be regenerated from it.
    Explicit,
    /// Taken from the wall clock because the caller gave none.
    Clock,
}

/// A request with every default applied and every value checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub style: Style,
    pub seed: u64,
    pub seed_source: SeedSource,
    pub complexity: f64,
    pub palette: Vec<Rgb>,
}

impl Params {
    pub fn resolve(request: &GenerationRequest, palettes: &PaletteDb) -> Result<Params> {
        let style = request.style;

        let complexity = request.parameters.complexity.unwrap_or(DEFAULT_COMPLEXITY);
        if !(0.0..=1.0).contains(&complexity) {
            // Also catches NaN, which no range contains.
            return Err(GenerationError::ComplexityOutOfRange(complexity));
        }

        let palette = match &request.parameters.palette {
            None => palettes.palette(style).to_vec(),
            Some(colors) => {
                let palette = parse_palette(colors)?;
                let required = style.min_palette_len();
                if palette.len() < required {
                    return Err(GenerationError::PaletteTooShort {
                        style,
                        required,
                        given: palette.len(),
                    });
                }
                palette
            }
        };

        let (seed, seed_source) = match request.seed.or(request.parameters.seed) {
            Some(seed) => (seed, SeedSource::Explicit),
            None => (clock_seed(), SeedSource::Clock),
        };

        Ok(Params {
            style,
            seed,
            seed_source,
            complexity,
            palette,
        })
    }
}

fn parse_palette(colors: &[String]) -> Result<Vec<Rgb>> {
    colors
        .iter()
        .enumerate()
        .map(|(index, value)| {
            value
                .parse::<Rgb>()
                .map_err(|source| GenerationError::InvalidColor {
                    index,
                    value: value.clone(),
                    source,
                })
        })
        .collect()
}

fn clock_seed() -> u64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    (millis % CLOCK_SEED_MODULUS) as u64
}
