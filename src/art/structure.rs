//! Styles with explicit structure: subdivisions, grids, trees and graphs.

use super::Context;
use crate::math::{add_polar_offset, dist, pi, Density};
use crate::rand::Rng;

pub const LOGICAL_DIVISIONS: Density = Density::new(4.0, 3.0);
pub const GROWTH_ROOTS: Density = Density::new(2.0, 3.0);
pub const NETWORK_NODES: Density = Density::new(15.0, 20.0);

const SUBDIVISION_DEPTH: u32 = 6;
const SUBDIVISION_ROOT: f64 = 0.7;
const SUBDIVISION_MIN_SIDE: f64 = 5.0;
const SUBDIVISION_KEEP_ODDS: f64 = 0.7;

const LOGICAL_FILL_ODDS: f64 = 0.5;

const GROWTH_DEPTH: u32 = 8;
const GROWTH_MIN_LENGTH: f64 = 3.0;
const GROWTH_ROOT_TILT: f64 = 0.25;
const GROWTH_BRANCH_TILT: f64 = 0.6;

/// Nodes closer than this may be linked.
pub const LINK_RANGE: f64 = 200.0;
const LINK_ODDS: f64 = 0.7;

/// Nested outlined squares, each quadrant kept at random.
pub(crate) fn recursive_patterns(ctx: &mut Context) {
    let size = ctx.canvas.size();
    subdivide(
        ctx,
        (size / 2.0, size / 2.0),
        size * SUBDIVISION_ROOT,
        SUBDIVISION_DEPTH,
    );
}

fn subdivide(ctx: &mut Context, (x, y): (f64, f64), side: f64, depth: u32) {
    if depth == 0 || side < SUBDIVISION_MIN_SIDE {
        return;
    }
    let color = ctx.cycle(depth as usize);
    let half = side / 2.0;
    ctx.canvas
        .stroke_rect((x - half, y - half), side, side, color, 1.0);

    let offset = side / 4.0;
    let quadrants = [
        (-offset, -offset),
        (offset, -offset),
        (-offset, offset),
        (offset, offset),
    ];
    for (dx, dy) in quadrants {
        if ctx.rng.odds(SUBDIVISION_KEEP_ODDS) {
            subdivide(ctx, (x + dx, y + dy), half, depth - 1);
        }
    }
}

/// A square grid where about half the cells carry a diagonal, a cross, or a quarter arc.
pub(crate) fn logical_structures(ctx: &mut Context) {
    let size = ctx.canvas.size();
    let divisions = LOGICAL_DIVISIONS.count(ctx.complexity);
    let cell = size / divisions as f64;
    let ink = ctx.palette[0];

    for i in 0..divisions {
        for j in 0..divisions {
            if !ctx.rng.odds(LOGICAL_FILL_ODDS) {
                continue;
            }
            let (x, y) = (i as f64 * cell, j as f64 * cell);
            match ctx.rng.range(0, 3) {
                0 => ctx.canvas.line((x, y), (x + cell, y + cell), ink, 1.0),
                1 => ctx.canvas.line((x + cell, y), (x, y + cell), ink, 1.0),
                2 => {
                    let mid = cell / 2.0;
                    ctx.canvas
                        .line((x + mid, y), (x + mid, y + cell), ink, 1.0);
                    ctx.canvas
                        .line((x, y + mid), (x + cell, y + mid), ink, 1.0);
                }
                _ => ctx
                    .canvas
                    .arc((x + cell, y + cell), cell, pi(1.0), pi(0.5), ink, 1.0),
            }
        }
    }
}

/// Trees growing up from the bottom of the canvas.
pub(crate) fn generative_growth(ctx: &mut Context) {
    let size = ctx.canvas.size();
    for _ in 0..GROWTH_ROOTS.count(ctx.complexity) {
        let x = size * ctx.rng.uniform(0.2, 0.8);
        let y = size * 0.9;
        let angle = -pi(0.5) + ctx.rng.uniform(-GROWTH_ROOT_TILT, GROWTH_ROOT_TILT);
        let length = ctx.rng.uniform(80.0, 120.0);
        grow(ctx, (x, y), angle, length, GROWTH_DEPTH);
    }
}

fn grow(ctx: &mut Context, from: (f64, f64), angle: f64, length: f64, depth: u32) {
    if depth == 0 || length < GROWTH_MIN_LENGTH {
        return;
    }
    let to = add_polar_offset(from, angle, length);
    let color = ctx.cycle(depth as usize);
    let width = (f64::from(depth) * 0.8).floor().max(1.0);
    ctx.canvas.line(from, to, color, width);

    let branches = 2 + ctx.rng.range(0, 1);
    for _ in 0..branches {
        let branch_angle = angle + ctx.rng.uniform(-GROWTH_BRANCH_TILT, GROWTH_BRANCH_TILT);
        let branch_length = length * ctx.rng.uniform(0.6, 0.9);
        grow(ctx, to, branch_angle, branch_length, depth - 1);
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Node {
    pub center: (f64, f64),
    pub radius: f64,
}

/// Node positions and the links between them, before anything is painted.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub nodes: Vec<Node>,
    /// Index pairs `(i, j)` with `i < j`.
    pub edges: Vec<(usize, usize)>,
}

impl Topology {
    pub fn build(rng: &mut Rng, size: f64, complexity: f64) -> Topology {
        let nodes: Vec<Node> = (0..NETWORK_NODES.count(complexity))
            .map(|_| {
                let center = (
                    size * rng.uniform(0.1, 0.9),
                    size * rng.uniform(0.1, 0.9),
                );
                let radius = rng.uniform(5.0, 20.0);
                Node { center, radius }
            })
            .collect();

        // Only pairs within range consume a draw.
        let mut edges = Vec::new();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if dist(nodes[i].center, nodes[j].center) < LINK_RANGE && rng.odds(LINK_ODDS) {
                    edges.push((i, j));
                }
            }
        }

        Topology { nodes, edges }
    }
}

/// Randomly placed nodes, with nearby pairs linked.
pub(crate) fn network_topology(ctx: &mut Context) {
    let topology = Topology::build(&mut ctx.rng, ctx.canvas.size(), ctx.complexity);
    let (link, node) = (ctx.palette[0], ctx.palette[1]);
    for &(i, j) in &topology.edges {
        let (a, b) = (topology.nodes[i].center, topology.nodes[j].center);
        ctx.canvas.line(a, b, link, 1.0);
    }
    for n in &topology.nodes {
        ctx.canvas.fill_circle(n.center, n.radius, node);
    }
}

#[cfg(test)]
mod test {
    use super::super::test_util::context;
    use super::*;
    use crate::style::Style;

    #[test]
    fn test_subdivision_is_bounded() {
        for seed in 0..20 {
            let mut ctx = context(Style::RecursivePatterns, seed, 0.7);
            recursive_patterns(&mut ctx);
            // At most 1 + 4 + ... + 4^5 squares over six levels.
            let marks = ctx.canvas.marks();
            assert!((1..=1365).contains(&marks), "seed {}: {} squares", seed, marks);
            // Depth 6 down to 1 cycles through the palette by depth.
            for color in ctx.canvas.colors_used() {
                assert!(ctx.palette.contains(&color));
            }
        }
    }

    #[test]
    fn test_subdivision_stops_on_small_squares() {
        let mut ctx = context(Style::RecursivePatterns, 1, 0.7);
        subdivide(&mut ctx, (10.0, 10.0), 4.9, SUBDIVISION_DEPTH);
        assert_eq!(ctx.canvas.marks(), 0);
        subdivide(&mut ctx, (10.0, 10.0), 9.0, SUBDIVISION_DEPTH);
        // 9 draws, its children (4.5) do not.
        assert_eq!(ctx.canvas.marks(), 1);
    }

    #[test]
    fn test_logical_occupancy() {
        let mut ctx = context(Style::LogicalStructures, 17, 1.0);
        logical_structures(&mut ctx);
        // 49 cells; crosses take two marks.
        let marks = ctx.canvas.marks();
        assert!((1..=2 * 49).contains(&marks), "{} marks", marks);
        assert_eq!(ctx.canvas.colors_used().as_slice(), &ctx.palette[..1]);
    }

    #[test]
    fn test_growth_is_bounded() {
        let mut ctx = context(Style::GenerativeGrowth, 23, 1.0);
        generative_growth(&mut ctx);
        // Five roots of at most 1 + 3 + ... + 3^7 segments.
        let marks = ctx.canvas.marks();
        assert!((5..=5 * 3280).contains(&marks), "{} segments", marks);
    }

    #[test]
    fn test_growth_stops_at_zero_depth() {
        let mut ctx = context(Style::GenerativeGrowth, 23, 1.0);
        grow(&mut ctx, (100.0, 100.0), 0.0, 100.0, 0);
        grow(&mut ctx, (100.0, 100.0), 0.0, 2.9, GROWTH_DEPTH);
        assert_eq!(ctx.canvas.marks(), 0);
    }

    #[test]
    fn test_topology_links_only_near_nodes() {
        let mut rng = Rng::from_seed(9);
        let topology = Topology::build(&mut rng, 800.0, 0.7);
        assert_eq!(topology.nodes.len(), 29);
        assert!(!topology.edges.is_empty());
        for &(i, j) in &topology.edges {
            assert!(i < j);
            let d = dist(topology.nodes[i].center, topology.nodes[j].center);
            assert!(d < LINK_RANGE, "edge {}-{} spans {}", i, j, d);
        }
    }

    #[test]
    fn test_network_draws_edges_then_nodes() {
        let mut ctx = context(Style::NetworkTopology, 9, 0.7);
        let expected = Topology::build(&mut ctx.rng.clone(), ctx.canvas.size(), 0.7);
        network_topology(&mut ctx);
        assert_eq!(
            ctx.canvas.marks(),
            expected.edges.len() + expected.nodes.len()
        );
    }
}
