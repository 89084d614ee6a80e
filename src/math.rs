use std::f64::consts::PI;

use crate::color::Rgb;

#[inline(always)]
pub fn pi(v: f64) -> f64 {
    PI * v
}

/// Computes the distance between two points.
pub fn dist((x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> f64 {
    f64::hypot(x2 - x1, y2 - y1)
}

pub fn add_polar_offset((x, y): (f64, f64), theta: f64, r: f64) -> (f64, f64) {
    (x + r * theta.cos(), y + r * theta.sin())
}

/// Vertices of a regular `n`-gon of circumradius `r` around `center`, starting at `rotation`.
pub fn regular_polygon(center: (f64, f64), r: f64, n: usize, rotation: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| add_polar_offset(center, rotation + pi(2.0) * i as f64 / n as f64, r))
        .collect()
}

/// A linear element count `floor(base + scale * complexity)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Density {
    pub base: f64,
    pub scale: f64,
}

impl Density {
    pub const fn new(base: f64, scale: f64) -> Self {
        Density { base, scale }
    }

    pub fn count(self, complexity: f64) -> usize {
        (self.base + self.scale * complexity).floor() as usize
    }
}

/// Fully saturated color for `hue` (degrees), with the brightest channel at `value`.
pub fn hue_to_rgb(hue: f64, value: f64) -> Rgb {
    let h = hue / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = if h < 1.0 {
        (1.0, x, 0.0)
    } else if h < 2.0 {
        (x, 1.0, 0.0)
    } else if h < 3.0 {
        (0.0, 1.0, x)
    } else if h < 4.0 {
        (0.0, x, 1.0)
    } else if h < 5.0 {
        (x, 0.0, 1.0)
    } else {
        (1.0, 0.0, x)
    };
    let channel = |c: f64| (c * value) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi() {
        assert_eq!(pi(0.0), 0.0);
        assert_eq!(pi(1.0), PI);
        assert_eq!(pi(-3.7), -3.7 * PI);
        assert!(pi(f64::NAN).is_nan());
    }

    #[test]
    fn test_dist() {
        assert_eq!(dist((0.0, 0.0), (3.0, 4.0)), 5.0);
        assert_eq!(dist((10.0, 20.0), (15.0, 32.0)), 13.0);
        assert_eq!(dist((1.0, 1.0), (1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_add_polar_offset() {
        let (x, y) = add_polar_offset((10.0, 20.0), pi(0.5), 2.0);
        assert!((x - 10.0).abs() < 1e-12);
        assert_eq!(y, 22.0);
    }

    #[test]
    fn test_regular_polygon() {
        let points = regular_polygon((0.0, 0.0), 1.0, 4, 0.0);
        assert_eq!(points.len(), 4);
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for ((x, y), (ex, ey)) in points.into_iter().zip(expected) {
            assert!(
                (x - ex).abs() < 1e-12 && (y - ey).abs() < 1e-12,
                "({}, {})",
                x,
                y
            );
        }
    }

    #[test]
    fn test_density() {
        assert_eq!(Density::new(2.0, 4.0).count(1.0), 6);
        assert_eq!(Density::new(15.0, 20.0).count(0.7), 29);
        assert_eq!(Density::new(15.0, 20.0).count(0.0), 15);
        assert_eq!(Density::new(4.0, 3.0).count(0.7), 6);
    }

    #[test]
    fn test_hue_to_rgb() {
        assert_eq!(hue_to_rgb(0.0, 180.0), Rgb::new(180, 0, 0));
        assert_eq!(hue_to_rgb(60.0, 180.0), Rgb::new(180, 180, 0));
        assert_eq!(hue_to_rgb(120.0, 180.0), Rgb::new(0, 180, 0));
        assert_eq!(hue_to_rgb(240.0, 180.0), Rgb::new(0, 0, 180));
        assert_eq!(hue_to_rgb(330.0, 180.0), Rgb::new(180, 0, 90));
    }
}
