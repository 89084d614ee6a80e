use crate::art::{self, Context};
use crate::canvas::Canvas;
use crate::color::PaletteDb;
use crate::config::Config;
use crate::encode;
use crate::error::{GenerationError, Result};
use crate::params::{GenerationRequest, Params, SeedSource};
use crate::rand::Rng;
use crate::style::Style;

/// Turns generation requests into artworks.
///
/// An engine holds only its configuration and the default palettes. Every call builds its own
/// canvas and random stream, so one engine can serve any number of threads at once.
#[derive(Debug, Clone)]
pub struct Engine {
    config: Config,
    palettes: PaletteDb,
}

/// A finished canvas and the parameters it was drawn with.
pub struct Rendering {
    pub params: Params,
    pub canvas: Canvas,
}

/// A finished artwork as PNG bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub style: Style,
    pub seed: u64,
    pub seed_source: SeedSource,
    pub png: Vec<u8>,
}

impl Artifact {
    /// Whether the caller chose the seed. A clock-derived seed still reproduces the artwork when
    /// passed back in explicitly.
    pub fn is_reproducible(&self) -> bool {
        self.seed_source == SeedSource::Explicit
    }

    pub fn to_base64(&self) -> String {
        encode::base64(&self.png)
    }
}

impl Engine {
    pub fn new(config: Config) -> Result<Engine> {
        if !(Config::MIN_SIZE..=Config::MAX_SIZE).contains(&config.size) {
            return Err(GenerationError::InvalidSize {
                size: config.size,
                min: Config::MIN_SIZE,
                max: Config::MAX_SIZE,
            });
        }
        Ok(Engine {
            config,
            palettes: PaletteDb::from_bundle(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn palettes(&self) -> &PaletteDb {
        &self.palettes
    }

    /// Draws the requested artwork without encoding it.
    pub fn render(&self, request: &GenerationRequest) -> Result<Rendering> {
        let params = Params::resolve(request, &self.palettes)?;
        let mut ctx = Context::new(
            Canvas::new(self.config.size, self.config.antialias),
            Rng::from_seed(params.seed),
            params.complexity,
            params.palette.clone(),
        );
        art::draw(params.style, &mut ctx);
        Ok(Rendering {
            params,
            canvas: ctx.canvas,
        })
    }

    pub fn generate(&self, request: &GenerationRequest) -> Result<Artifact> {
        let Rendering { params, canvas } = self.render(request)?;
        let png = encode::png(&canvas)?;
        Ok(Artifact {
            style: params.style,
            seed: params.seed,
            seed_source: params.seed_source,
            png,
        })
    }
}
