//! Styles built from discrete, free-standing shapes.

use super::Context;
use crate::math::{add_polar_offset, hue_to_rgb, pi, regular_polygon, Density};

pub const GEOMETRIC_SHAPES: Density = Density::new(2.0, 4.0);
pub const SPECTRAL_TRIANGLES: Density = Density::new(15.0, 20.0);
pub const SYMBOLIC_GLYPHS: Density = Density::new(8.0, 10.0);

// Brightest channel of the hue sweep.
const SPECTRAL_VALUE: f64 = 180.0;

const WEAVE_CELLS: usize = 12;
const WEAVE_WARP: f64 = 50.0;
const WEAVE_DIAMONDS: usize = 5;
const WEAVE_DIAMOND_ALPHA: u8 = 0x40;

const CODE_CELL_W: usize = 12;
const CODE_CELL_H: usize = 18;
const CODE_INK_ODDS: f64 = 0.3;
const CODE_FRAMES: usize = 5;
const GOLDEN_RATIO: f64 = 0.618;

/// A few outlined circles, lines and triangles in the central region.
pub(crate) fn geometric_minimalist(ctx: &mut Context) {
    let size = ctx.canvas.size();
    for _ in 0..GEOMETRIC_SHAPES.count(ctx.complexity) {
        let kind = ctx.rng.range(0, 2);
        let center = (
            size * ctx.rng.uniform(0.2, 0.8),
            size * ctx.rng.uniform(0.2, 0.8),
        );
        let r = size * ctx.rng.uniform(0.1, 0.4);
        let color = ctx.pick();
        let width = ctx.rng.uniform(2.0, 5.0).floor();

        match kind {
            0 => ctx.canvas.stroke_circle(center, r, color, width),
            1 => {
                let angle = ctx.rng.uniform(0.0, pi(1.0));
                let from = add_polar_offset(center, angle, -r);
                let to = add_polar_offset(center, angle, r);
                ctx.canvas.line(from, to, color, width);
            }
            _ => {
                let points = regular_polygon(center, r, 3, -pi(0.5));
                ctx.canvas.stroke_polygon(&points, color, width);
            }
        }
    }
}

/// Solid triangles scattered around the center, colored by a hue sweep. Ignores the palette.
pub(crate) fn spectral_fragmentation(ctx: &mut Context) {
    let size = ctx.canvas.size();
    let center = (size / 2.0, size / 2.0);
    let n = SPECTRAL_TRIANGLES.count(ctx.complexity);
    for i in 0..n {
        let color = hue_to_rgb(i as f64 / n as f64 * 360.0, SPECTRAL_VALUE);
        let dist = ctx.rng.uniform(50.0, 350.0);
        let angle = ctx.rng.uniform(0.0, pi(2.0));
        let at = add_polar_offset(center, angle, dist);
        let r = ctx.rng.uniform(30.0, 110.0);
        let rotation = ctx.rng.uniform(0.0, pi(2.0));
        ctx.canvas.fill_polygon(&regular_polygon(at, r, 3, rotation), color);
    }
}

/// A sine-warped grid overlaid with translucent diamonds.
pub(crate) fn dimensional_weaving(ctx: &mut Context) {
    let size = ctx.canvas.size();
    let cell = size / WEAVE_CELLS as f64;
    let (across, down) = (ctx.palette[0], ctx.palette[1]);

    for i in 0..=WEAVE_CELLS {
        let offset = pi(i as f64 / WEAVE_CELLS as f64).sin() * WEAVE_WARP;
        let at = i as f64 * cell;
        ctx.canvas.line((0.0, at + offset), (size, at - offset), across, 1.0);
        ctx.canvas.line((at + offset, 0.0), (at - offset, size), down, 1.0);
    }

    for _ in 0..WEAVE_DIAMONDS {
        let x = size * ctx.rng.uniform(0.2, 0.8);
        let y = size * ctx.rng.uniform(0.2, 0.8);
        let r = ctx.rng.uniform(40.0, 100.0);
        let diamond = [(x, y - r), (x + r, y), (x, y + r), (x - r, y)];
        ctx.canvas.fill_polygon(&diamond, across.with_alpha(WEAVE_DIAMOND_ALPHA));
    }
}

/// Scattered abstract glyphs drawn from five archetypes.
pub(crate) fn symbolic_language(ctx: &mut Context) {
    let size = ctx.canvas.size();
    for _ in 0..SYMBOLIC_GLYPHS.count(ctx.complexity) {
        let center = (
            size * ctx.rng.uniform(0.1, 0.9),
            size * ctx.rng.uniform(0.1, 0.9),
        );
        let s = ctx.rng.uniform(30.0, 80.0);
        let color = ctx.pick();
        let width = ctx.rng.uniform(2.0, 4.0).floor();
        let kind = ctx.rng.range(0, 4);

        let (x, y) = center;
        let half = s / 2.0;
        let canvas = &mut ctx.canvas;
        match kind {
            // Ringed line.
            0 => {
                canvas.stroke_circle(center, half, color, width);
                canvas.line((x, y - half), (x, y + s), color, width);
            }
            // Crossed circle.
            1 => {
                canvas.line((x - half, y), (x + half, y), color, width);
                canvas.line((x, y - half), (x, y + half), color, width);
                canvas.stroke_circle(center, s / 4.0, color, width);
            }
            // Arrow.
            2 => {
                canvas.line((x, y - half), (x + half, y), color, width);
                canvas.line((x + half, y), (x, y + half), color, width);
                canvas.line((x + half, y), (x - half, y), color, width);
            }
            // Triple wavelet.
            3 => {
                for row in 0..3 {
                    let wy = y - s / 3.0 + row as f64 * s / 3.0;
                    let points: Vec<(f64, f64)> = (0..(s / 5.0) as usize)
                        .map(|j| {
                            let j = j as f64;
                            (x - half + j * 10.0, wy + (j * 0.5).sin() * 10.0)
                        })
                        .collect();
                    canvas.polyline(&points, color, width);
                }
            }
            // Jittered n-gon.
            _ => {
                let n = ctx.rng.range(4, 6) as usize;
                let points: Vec<(f64, f64)> = (0..n)
                    .map(|i| {
                        let angle = pi(2.0) * i as f64 / n as f64;
                        add_polar_offset(center, angle, half * ctx.rng.uniform(0.5, 1.0))
                    })
                    .collect();
                canvas.stroke_polygon(&points, color, width);
            }
        }
    }
}

/// A sparse matrix of digits under a handful of golden-ratio frames.
pub(crate) fn encoded_aesthetics(ctx: &mut Context) {
    let side = ctx.canvas.width() as usize;
    let size = ctx.canvas.size();
    let (ink, frame) = (ctx.palette[0], ctx.palette[1]);

    for y in (0..side).step_by(CODE_CELL_H) {
        for x in (0..side).step_by(CODE_CELL_W) {
            if ctx.rng.odds(CODE_INK_ODDS) {
                let digit = ctx.rng.range(0, 9) as u8;
                ctx.canvas.glyph(digit, (x as f64, y as f64), ink);
            }
        }
    }

    for _ in 0..CODE_FRAMES {
        let corner = (ctx.rng.uniform(0.0, size), ctx.rng.uniform(0.0, size));
        let w = ctx.rng.uniform(50.0, 200.0);
        ctx.canvas.stroke_rect(corner, w, w * GOLDEN_RATIO, frame, 1.0);
    }
}
