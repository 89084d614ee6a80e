//! The style generators. They are reached only through [`Engine`](crate::Engine), which
//! validates the palette and complexity before any drawing starts:
//!
//! ```compile_fail
//! use latent::art::{draw, Context};
//! ```

use super::canvas::Canvas;
use super::color::Rgb;
use super::rand::Rng;
use super::style::Style;

pub mod fields;
pub mod flow;
pub mod shapes;
pub mod structure;

/// Everything a single generation call owns while it draws: the canvas, the random stream, and
/// the resolved parameters. A fresh `Context` is built for every call and consumed when the
/// artwork is finished, so concurrent calls share nothing mutable.
pub(crate) struct Context {
    pub(crate) canvas: Canvas,
    pub(crate) rng: Rng,
    pub(crate) complexity: f64,
    pub(crate) palette: Vec<Rgb>,
}

impl Context {
    pub(crate) fn new(canvas: Canvas, rng: Rng, complexity: f64, palette: Vec<Rgb>) -> Self {
        Context {
            canvas,
            rng,
            complexity,
            palette,
        }
    }

    /// Draws a palette color uniformly at random.
    fn pick(&mut self) -> Rgb {
        *self.rng.choice(&self.palette)
    }

    /// The palette color at `index`, wrapping around.
    fn cycle(&self, index: usize) -> Rgb {
        self.palette[index % self.palette.len()]
    }
}

/// Runs the generator for `style` against `ctx`.
pub(crate) fn draw(style: Style, ctx: &mut Context) {
    match style {
        Style::GeometricMinimalist => shapes::geometric_minimalist(ctx),
        Style::OrganicFlow => flow::organic_flow(ctx),
        Style::VoidExploration => fields::void_exploration(ctx),
        Style::SpectralFragmentation => shapes::spectral_fragmentation(ctx),
        Style::RecursivePatterns => structure::recursive_patterns(ctx),
        Style::DimensionalWeaving => shapes::dimensional_weaving(ctx),
        Style::SymbolicLanguage => shapes::symbolic_language(ctx),
        Style::FrequencyVisualization => flow::frequency_visualization(ctx),
        Style::LogicalStructures => structure::logical_structures(ctx),
        Style::GenerativeGrowth => structure::generative_growth(ctx),
        Style::EncodedAesthetics => shapes::encoded_aesthetics(ctx),
        Style::AmbientFields => fields::ambient_fields(ctx),
        Style::NetworkTopology => structure::network_topology(ctx),
        Style::PureAbsence => fields::pure_absence(ctx),
        Style::SpiralDynamics => flow::spiral_dynamics(ctx),
    }
}


#[cfg(test)]
mod test {
    use super::test_util::context;
    use super::*;

    #[test]
    fn test_every_style_draws() {
        for &style in Style::ALL {
            let mut ctx = context(style, 5, 0.5);
            draw(style, &mut ctx);
            assert!(ctx.canvas.marks() > 0, "{} drew nothing", style);
        }
    }

    #[test]
    fn test_cycle_wraps() {
        let ctx = context(Style::SpiralDynamics, 1, 0.0);
        assert_eq!(ctx.cycle(0), ctx.cycle(4));
        assert_eq!(ctx.cycle(1), Rgb::new(0xff, 0xd9, 0x3d));
    }
}
