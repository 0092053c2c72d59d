//! Geometry of the procedural leaf emblem.
//!
//! All functions here are pure and testable without any I/O or pixels. The
//! backend turns the returned shapes into fills and strokes.
//!
//! Every coordinate is a fixed ratio of the canvas edge `s`, so the emblem
//! looks the same at every density:
//!
//! ```text
//!             (c, .1s)
//!               /\
//!   (c-.4l,.3s)/  \(c+.4l,.3s)       c = s / 2 (integer)
//!              \  /                  l = 0.8 * s
//!   (c-.3l,.4s) ||  (c+.3l,.4s)
//!              /  \
//!   (c-.4l,.6s)\  /(c+.4l,.6s)
//!               \/
//!             (c, .9s)
//! ```

/// A point in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A straight vein drawn on top of the leaf body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vein {
    pub from: Point,
    pub to: Point,
    /// Stroke width in pixels.
    pub width: f32,
}

/// Complete drawing instructions for one canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafGeometry {
    pub outline: Vec<Point>,
    pub veins: Vec<Vein>,
}

impl LeafGeometry {
    pub fn for_size(size: u32) -> Self {
        Self {
            outline: leaf_outline(size),
            veins: leaf_veins(size),
        }
    }
}

/// Horizontal center (integer-truncated) and leaf span for a canvas size.
fn center_and_span(size: u32) -> (f32, f32, f32) {
    let s = size as f32;
    let c = (size / 2) as f32;
    let l = s * 0.8;
    (s, c, l)
}

/// Ten-point outline: top tip, left lobes, base, right lobes (mirrored).
pub fn leaf_outline(size: u32) -> Vec<Point> {
    let (s, c, l) = center_and_span(size);
    vec![
        Point::new(c, s * 0.1),
        Point::new(c - l * 0.4, s * 0.3),
        Point::new(c - l * 0.3, s * 0.4),
        Point::new(c - l * 0.4, s * 0.6),
        Point::new(c - l * 0.1, s * 0.8),
        Point::new(c, s * 0.9),
        Point::new(c + l * 0.1, s * 0.8),
        Point::new(c + l * 0.4, s * 0.6),
        Point::new(c + l * 0.3, s * 0.4),
        Point::new(c + l * 0.4, s * 0.3),
    ]
}

/// Midrib plus two pairs of side veins.
pub fn leaf_veins(size: u32) -> Vec<Vein> {
    let (s, c, l) = center_and_span(size);
    let midrib = midrib_width(size);
    let side = side_vein_width(size);
    let vein = |from: Point, to: Point, width: f32| Vein { from, to, width };

    vec![
        vein(Point::new(c, s * 0.9), Point::new(c, s * 0.2), midrib),
        vein(Point::new(c, s * 0.5), Point::new(c - l * 0.3, s * 0.3), side),
        vein(Point::new(c, s * 0.5), Point::new(c + l * 0.3, s * 0.3), side),
        vein(Point::new(c, s * 0.6), Point::new(c - l * 0.35, s * 0.5), side),
        vein(Point::new(c, s * 0.6), Point::new(c + l * 0.35, s * 0.5), side),
    ]
}

/// `max(2, size / 48)`
pub fn midrib_width(size: u32) -> f32 {
    (size / 48).max(2) as f32
}

/// `max(1, size / 72)`
pub fn side_vein_width(size: u32) -> f32 {
    (size / 72).max(1) as f32
}
