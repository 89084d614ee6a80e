//! Styles made of long continuous strokes.

use super::Context;
use crate::math::{add_polar_offset, pi, Density};

pub const ORGANIC_LINES: Density = Density::new(5.0, 8.0);
pub const FREQUENCY_WAVES: Density = Density::new(8.0, 8.0);
pub const SPIRALS: Density = Density::new(2.0, 3.0);

const FLOW_STEPS: usize = 50;
const FLOW_STEP_LENGTH: f64 = 15.0;
const FLOW_TURN: f64 = 0.25;

const WAVE_SAMPLE_SPACING: usize = 2;
const WAVE_WIDTH: f64 = 2.0;

const SPIRAL_SAMPLES: usize = 500;
const SPIRAL_SWEEP: f64 = 8.0; // in units of pi
const SPIRAL_REACH: f64 = 0.45;

/// Random walks with a slowly wandering heading.
pub(crate) fn organic_flow(ctx: &mut Context) {
    let size = ctx.canvas.size();
    for _ in 0..ORGANIC_LINES.count(ctx.complexity) {
        let mut at = (ctx.rng.uniform(0.0, size), ctx.rng.uniform(0.0, size));
        let mut heading = ctx.rng.uniform(0.0, pi(2.0));

        let mut points = Vec::with_capacity(FLOW_STEPS);
        for _ in 0..FLOW_STEPS {
            points.push(at);
            heading += ctx.rng.uniform(-FLOW_TURN, FLOW_TURN);
            at = add_polar_offset(at, heading, FLOW_STEP_LENGTH);
        }

        let color = ctx.pick();
        let width = ctx.rng.uniform(3.0, 11.0).floor();
        ctx.canvas.polyline(&points, color, width);
    }
}

/// Stacked sine waves spanning the full width.
pub(crate) fn frequency_visualization(ctx: &mut Context) {
    let size = ctx.canvas.size();
    let side = ctx.canvas.width() as usize;
    let n = FREQUENCY_WAVES.count(ctx.complexity);
    for w in 0..n {
        let frequency = ctx.rng.uniform(2.0, 10.0);
        let amplitude = ctx.rng.uniform(20.0, 100.0);
        let baseline = w as f64 / n as f64 * size;
        let phase = ctx.rng.uniform(0.0, pi(2.0));
        let color = ctx.cycle(w);

        let points: Vec<(f64, f64)> = (0..side)
            .step_by(WAVE_SAMPLE_SPACING)
            .map(|x| {
                let x = x as f64;
                let theta = x * frequency / size * pi(2.0) + phase;
                (x, baseline + theta.sin() * amplitude)
            })
            .collect();
        ctx.canvas.polyline(&points, color, WAVE_WIDTH);
    }
}

/// Archimedean spirals around the center, evenly phased, each turning a random way.
pub(crate) fn spiral_dynamics(ctx: &mut Context) {
    let size = ctx.canvas.size();
    let center = (size / 2.0, size / 2.0);
    let n = SPIRALS.count(ctx.complexity);
    for s in 0..n {
        let start = s as f64 / n as f64 * pi(2.0);
        let direction = if ctx.rng.odds(0.5) { 1.0 } else { -1.0 };
        let color = ctx.cycle(s);
        let width = ctx.rng.uniform(2.0, 5.0).floor();

        let points: Vec<(f64, f64)> = (0..SPIRAL_SAMPLES)
            .map(|i| {
                let t = i as f64 / SPIRAL_SAMPLES as f64;
                let angle = start + t * pi(SPIRAL_SWEEP) * direction;
                add_polar_offset(center, angle, t * size * SPIRAL_REACH)
            })
            .collect();
        ctx.canvas.polyline(&points, color, width);
    }
}
