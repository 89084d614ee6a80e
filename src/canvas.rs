use raqote::{
    AntialiasMode, BlendMode, DrawOptions, DrawTarget, LineCap, LineJoin, Path, PathBuilder,
    SolidSource, Source, StrokeStyle,
};

use crate::color::{Rgb, Rgba};
use crate::math::{add_polar_offset, pi};

mod colors_used;
mod glyphs;

pub use colors_used::ColorsUsed;

/// Pixel edge of one glyph cell.
const GLYPH_SCALE: f32 = 2.0;

/// A square RGB raster that one generation call draws into.
///
/// Every drawing operation counts as one *mark* and records its color, so callers can inspect
/// what a style drew without reading pixels back.
pub struct Canvas {
    dt: DrawTarget,
    antialias: AntialiasMode,
    colors_used: ColorsUsed,
    marks: usize,
}

impl Canvas {
    /// Allocates a `size`×`size` canvas cleared to [`Rgb::BACKGROUND`]. Callers keep `size` within
    /// [`Config::MAX_SIZE`][crate::config::Config::MAX_SIZE].
    pub fn new(size: u32, antialias: bool) -> Self {
        let mut dt = DrawTarget::new(size as i32, size as i32);
        let Rgb { r, g, b } = Rgb::BACKGROUND;
        dt.clear(SolidSource::from_unpremultiplied_argb(0xff, r, g, b));
        Canvas {
            dt,
            antialias: if antialias {
                AntialiasMode::Gray
            } else {
                AntialiasMode::None
            },
            colors_used: ColorsUsed::new(),
            marks: 0,
        }
    }

    /// Side length in pixels, as a drawing coordinate.
    pub fn size(&self) -> f64 {
        f64::from(self.dt.width())
    }

    pub fn width(&self) -> u32 {
        self.dt.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.dt.height() as u32
    }

    pub fn marks(&self) -> usize {
        self.marks
    }

    pub fn colors_used(&self) -> &ColorsUsed {
        &self.colors_used
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, width: f64) {
        self.polyline(&[from, to], color, width);
    }

    /// Strokes an open path through `points`. Fewer than two points draw nothing.
    pub fn polyline(&mut self, points: &[(f64, f64)], color: Rgb, width: f64) {
        if points.len() < 2 {
            return;
        }
        let path = path_through(points, false);
        self.stroke(&path, color, width);
    }

    pub fn stroke_polygon(&mut self, points: &[(f64, f64)], color: Rgb, width: f64) {
        if points.len() < 2 {
            return;
        }
        let path = path_through(points, true);
        self.stroke(&path, color, width);
    }

    pub fn fill_polygon(&mut self, points: &[(f64, f64)], color: impl Into<Rgba>) {
        if points.len() < 3 {
            return;
        }
        let path = path_through(points, true);
        self.fill(&path, color.into());
    }

    /// Outlines the axis-aligned rectangle with top-left corner `(x, y)`.
    pub fn stroke_rect(&mut self, (x, y): (f64, f64), w: f64, h: f64, color: Rgb, width: f64) {
        let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
        self.stroke_polygon(&corners, color, width);
    }

    pub fn stroke_circle(&mut self, center: (f64, f64), r: f64, color: Rgb, width: f64) {
        let path = arc_path(center, r, 0.0, pi(2.0), true);
        self.stroke(&path, color, width);
    }

    pub fn fill_circle(&mut self, center: (f64, f64), r: f64, color: impl Into<Rgba>) {
        let path = arc_path(center, r, 0.0, pi(2.0), true);
        self.fill(&path, color.into());
    }

    /// Strokes the arc of the circle at `center` from angle `start` through `sweep` radians.
    /// Angles grow clockwise on screen, since the y axis points down.
    pub fn arc(
        &mut self,
        center: (f64, f64),
        r: f64,
        start: f64,
        sweep: f64,
        color: Rgb,
        width: f64,
    ) {
        let path = arc_path(center, r, start, sweep, false);
        self.stroke(&path, color, width);
    }

    /// Stamps a decimal digit with its top-left corner at `(x, y)`. Values above 9 draw nothing.
    pub fn glyph(&mut self, digit: u8, (x, y): (f64, f64), color: Rgb) {
        let Some(cells) = glyphs::digit_cells(digit) else {
            return;
        };
        let source = solid(color.into());
        let options = self.options(0xff);
        for (col, row) in cells {
            self.dt.fill_rect(
                x as f32 + col as f32 * GLYPH_SCALE,
                y as f32 + row as f32 * GLYPH_SCALE,
                GLYPH_SCALE,
                GLYPH_SCALE,
                &source,
                &options,
            );
        }
        self.record(color);
    }

    /// Color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        assert!(x < self.width() && y < self.height(), "pixel out of bounds");
        unpack(self.dt.get_data()[(y * self.width() + x) as usize])
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.dt.get_data().iter().copied().map(unpack)
    }

    /// Packed 24-bit RGB samples in row-major order, three bytes per pixel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.dt.get_data().len() * 3);
        for Rgb { r, g, b } in self.pixels() {
            bytes.extend_from_slice(&[r, g, b]);
        }
        bytes
    }

    fn stroke(&mut self, path: &Path, color: Rgb, width: f64) {
        let style = StrokeStyle {
            width: width as f32,
            cap: LineCap::Butt,
            join: LineJoin::Round,
            ..StrokeStyle::default()
        };
        let options = self.options(0xff);
        self.dt.stroke(path, &solid(color.into()), &style, &options);
        self.record(color);
    }

    fn fill(&mut self, path: &Path, color: Rgba) {
        let options = self.options(color.a);
        // Translucency comes from the draw options, so the source itself stays opaque.
        self.dt.fill(path, &solid(color.rgb.into()), &options);
        self.record(color.rgb);
    }

    fn options(&self, alpha: u8) -> DrawOptions {
        DrawOptions {
            blend_mode: BlendMode::SrcOver,
            alpha: f32::from(alpha) / 255.0,
            antialias: self.antialias,
        }
    }

    fn record(&mut self, color: Rgb) {
        self.colors_used.insert(color);
        self.marks += 1;
    }
}

fn solid(color: Rgba) -> Source<'static> {
    let Rgba { rgb: Rgb { r, g, b }, a } = color;
    Source::Solid(SolidSource::from_unpremultiplied_argb(a, r, g, b))
}

// The canvas is opaque from the first clear onward, so premultiplied and straight channels agree.
fn unpack(argb: u32) -> Rgb {
    let [b, g, r, _a] = argb.to_le_bytes();
    Rgb::new(r, g, b)
}

fn path_through(points: &[(f64, f64)], closed: bool) -> Path {
    let mut pb = PathBuilder::new();
    let mut points = points.iter();
    if let Some(&(x, y)) = points.next() {
        pb.move_to(x as f32, y as f32);
    }
    for &(x, y) in points {
        pb.line_to(x as f32, y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

fn arc_path(center: (f64, f64), r: f64, start: f64, sweep: f64, closed: bool) -> Path {
    let (sx, sy) = add_polar_offset(center, start, r);
    let mut pb = PathBuilder::new();
    pb.move_to(sx as f32, sy as f32);
    pb.arc(
        center.0 as f32,
        center.1 as f32,
        r as f32,
        start as f32,
        sweep as f32,
    );
    if closed {
        pb.close();
    }
    pb.finish()
}

#[cfg(test)]
mod test {
    use super::*;

    const RED: Rgb = Rgb::new(0xff, 0x00, 0x00);

    #[test]
    fn test_starts_with_background() {
        let canvas = Canvas::new(32, false);
        assert_eq!((canvas.width(), canvas.height()), (32, 32));
        assert!(canvas.pixels().all(|px| px == Rgb::BACKGROUND));
        assert_eq!(canvas.marks(), 0);
        assert_eq!(canvas.to_rgb_bytes().len(), 32 * 32 * 3);
    }

    #[test]
    fn test_fill_circle() {
        let mut canvas = Canvas::new(64, false);
        canvas.fill_circle((32.0, 32.0), 10.0, RED);
        assert_eq!(canvas.pixel(32, 32), RED);
        assert_eq!(canvas.pixel(2, 2), Rgb::BACKGROUND);
        assert_eq!(canvas.marks(), 1);
        assert_eq!(canvas.colors_used().as_slice(), &[RED]);
    }

    #[test]
    fn test_stroke_circle_leaves_center() {
        let mut canvas = Canvas::new(64, false);
        canvas.stroke_circle((32.0, 32.0), 20.0, RED, 4.0);
        assert_eq!(canvas.pixel(32, 32), Rgb::BACKGROUND);
        assert_eq!(canvas.pixel(52, 32), RED);
    }

    #[test]
    fn test_aliased_pixels_are_exact() {
        let mut canvas = Canvas::new(64, false);
        canvas.line((3.3, 5.1), (60.7, 41.9), RED, 3.0);
        canvas.fill_polygon(&[(10.2, 50.0), (30.7, 12.1), (55.5, 60.3)], Rgb::WHITE);
        assert!(canvas
            .pixels()
            .all(|px| px == RED || px == Rgb::WHITE || px == Rgb::BACKGROUND));
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut canvas = Canvas::new(16, false);
        canvas.fill_polygon(
            &[(0.0, 0.0), (16.0, 0.0), (16.0, 16.0), (0.0, 16.0)],
            Rgb::WHITE.with_alpha(0x40),
        );
        let px = canvas.pixel(8, 8);
        assert!(px.r > Rgb::BACKGROUND.r && px.r < 0xff, "{:?}", px);
        assert_eq!(canvas.colors_used().as_slice(), &[Rgb::WHITE]);
    }

    #[test]
    fn test_glyph() {
        let mut canvas = Canvas::new(16, false);
        canvas.glyph(1, (0.0, 0.0), RED);
        // Top row of a "1" lights only the middle column.
        assert_eq!(canvas.pixel(0, 0), Rgb::BACKGROUND);
        assert_eq!(canvas.pixel(2, 0), RED);
        assert_eq!(canvas.pixel(3, 1), RED);
        assert_eq!(canvas.pixel(4, 0), Rgb::BACKGROUND);
        assert_eq!(canvas.marks(), 1);

        canvas.glyph(12, (0.0, 0.0), Rgb::WHITE);
        assert_eq!(canvas.marks(), 1);
    }

    #[test]
    fn test_degenerate_paths_are_skipped() {
        let mut canvas = Canvas::new(16, false);
        canvas.polyline(&[(1.0, 1.0)], RED, 2.0);
        canvas.fill_polygon(&[(1.0, 1.0), (5.0, 5.0)], RED);
        assert_eq!(canvas.marks(), 0);
        assert!(canvas.pixels().all(|px| px == Rgb::BACKGROUND));
    }
}
