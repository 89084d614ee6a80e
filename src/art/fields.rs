//! Sparse styles over soft radial backdrops.
//!
//! Gradients are approximated by stacking opaque circles (or rings) whose color or density
//! changes with radius; nothing here relies on alpha compositing.

use super::Context;
use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::math::Density;

pub const VOID_DOTS: Density = Density::new(3.0, 5.0);

const VOID_RING_STEP: usize = 10;
const VOID_EDGE_BAND: f64 = 50.0;

const FIELDS: usize = 5;
const FIELD_RING_STEP: usize = 5;
const FIELD_RING_WIDTH: f64 = 5.0;

const ABSENCE_RING_STEP: usize = 20;

/// Fills concentric discs from the canvas half-size inward, brightening gently toward the rim.
fn radial_backdrop(canvas: &mut Canvas, step: usize, spread: f64, blue_lift: u8) {
    let half = canvas.width() / 2;
    let center = (f64::from(half), f64::from(half));
    for r in (1..=half).rev().step_by(step) {
        let level = (10.0 + f64::from(r) / f64::from(half) * spread) as u8;
        canvas.fill_circle(center, f64::from(r), Rgb::dim_gray(level, blue_lift));
    }
}

/// A dim backdrop with a few small dots hugging the canvas edges.
pub(crate) fn void_exploration(ctx: &mut Context) {
    radial_backdrop(&mut ctx.canvas, VOID_RING_STEP, 5.0, 5);

    let size = ctx.canvas.size();
    for _ in 0..VOID_DOTS.count(ctx.complexity) {
        let at = match ctx.rng.range(0, 3) {
            0 => (
                ctx.rng.uniform(0.0, size),
                ctx.rng.uniform(0.0, VOID_EDGE_BAND),
            ),
            1 => (
                ctx.rng.uniform(0.0, size),
                size - ctx.rng.uniform(0.0, VOID_EDGE_BAND),
            ),
            2 => (
                ctx.rng.uniform(0.0, VOID_EDGE_BAND),
                ctx.rng.uniform(0.0, size),
            ),
            _ => (
                size - ctx.rng.uniform(0.0, VOID_EDGE_BAND),
                ctx.rng.uniform(0.0, size),
            ),
        };
        let r = ctx.rng.uniform(2.0, 6.0);
        let color = ctx.pick();
        ctx.canvas.fill_circle(at, r, color);
    }
}

/// Overlapping fields of thick concentric rings.
pub(crate) fn ambient_fields(ctx: &mut Context) {
    let size = ctx.canvas.size();
    for _ in 0..FIELDS {
        let center = (ctx.rng.uniform(0.0, size), ctx.rng.uniform(0.0, size));
        let max_r = ctx.rng.uniform(200.0, 600.0) as u32;
        let color = ctx.pick();
        for r in (1..=max_r).rev().step_by(FIELD_RING_STEP) {
            ctx.canvas.stroke_circle(center, f64::from(r), color, FIELD_RING_WIDTH);
        }
    }
}

/// An almost imperceptible backdrop and, half the time, one tiny dot.
pub(crate) fn pure_absence(ctx: &mut Context) {
    radial_backdrop(&mut ctx.canvas, ABSENCE_RING_STEP, 3.0, 2);

    if ctx.rng.odds(0.5) {
        let size = ctx.canvas.size();
        let at = (
            size * ctx.rng.uniform(0.3, 0.7),
            size * ctx.rng.uniform(0.3, 0.7),
        );
        let r = ctx.rng.uniform(2.0, 5.0);
        let color = ctx.palette[0];
        ctx.canvas.fill_circle(at, r, color);
    }
}

#[cfg(test)]
mod test {
    use super::super::test_util::context;
    use super::*;
    use crate::style::Style;

    #[test]
    fn test_backdrop_rings() {
        let mut canvas = Canvas::new(200, false);
        radial_backdrop(&mut canvas, VOID_RING_STEP, 5.0, 5);
        // Radii 100, 90, ..., 10.
        assert_eq!(canvas.marks(), 10);
        assert_eq!(canvas.pixel(100, 100), Rgb::dim_gray(10, 5));
        assert_eq!(canvas.pixel(0, 0), Rgb::BACKGROUND);
        assert!(canvas.colors_used().contains(Rgb::dim_gray(15, 5)));
    }

    #[test]
    fn test_void_dot_count() {
        let mut ctx = context(Style::VoidExploration, 13, 1.0);
        void_exploration(&mut ctx);
        // Ten backdrop discs, then eight dots.
        assert_eq!(ctx.canvas.marks(), 10 + 8);
        let center = ctx.canvas.pixel(100, 100);
        assert_eq!(center, Rgb::dim_gray(10, 5));
    }

    #[test]
    fn test_void_dots_hug_edges() {
        // Dots sit at most the band plus their largest radius away from an edge.
        let reach = VOID_EDGE_BAND + 6.0;
        for seed in 0..10 {
            let mut ctx = context(Style::VoidExploration, seed, 1.0);
            ctx.canvas = Canvas::new(400, false);
            void_exploration(&mut ctx);

            let side = ctx.canvas.width();
            let mut dot_pixels = 0;
            for y in 0..side {
                for x in 0..side {
                    if !ctx.palette.contains(&ctx.canvas.pixel(x, y)) {
                        continue;
                    }
                    dot_pixels += 1;
                    let edge = x.min(y).min(side - 1 - x).min(side - 1 - y);
                    assert!(
                        f64::from(edge) <= reach,
                        "seed {}: dot pixel ({}, {}) is {}px from the nearest edge",
                        seed,
                        x,
                        y,
                        edge
                    );
                }
            }
            assert!(dot_pixels > 0, "seed {}: no dots drawn", seed);
        }
    }

    #[test]
    fn test_ambient_ring_count() {
        let mut ctx = context(Style::AmbientFields, 31, 0.5);
        ambient_fields(&mut ctx);
        // Each field has between 40 and 120 rings.
        let marks = ctx.canvas.marks();
        assert!((5 * 40..=5 * 120).contains(&marks), "{} rings", marks);
        for color in ctx.canvas.colors_used() {
            assert!(ctx.palette.contains(&color));
        }
    }

    #[test]
    fn test_absence_dot_frequency() {
        let with_dot = (1..=1000)
            .filter(|&seed| {
                let mut ctx = context(Style::PureAbsence, seed, 0.5);
                pure_absence(&mut ctx);
                ctx.canvas.colors_used().contains(Rgb::WHITE)
            })
            .count();
        assert!((430..=570).contains(&with_dot), "{} dots", with_dot);
    }
}
