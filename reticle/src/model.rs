use serde::{Deserialize, Serialize};

/// Width of the sight frame at default zoom, in the game's normalized units.
pub const FRAME_WIDTH: f64 = 1.78;
/// Height of the sight frame at default zoom.
pub const FRAME_HEIGHT: f64 = 1.0;
/// Hard cap on drawable line primitives per sight file.
pub const LINE_LIMIT: u32 = 2500;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight segment from `start` to `end`. Segments never reference each
/// other; chaining is purely positional.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: Point,
    pub end: Point,
}

impl LineSegment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Control points of a cubic Bézier curve. `p0` is always inherited from the
/// previous path command's terminal point, never created independently.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBezier {
    pub fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

/// One parsed path command, absolute coordinates. Every command after the
/// first starts where the previous one ended.
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    Move(Point),
    /// Target points for an `L` command: one (simple line) or two (chained
    /// through an intermediate point).
    Line(Vec<Point>),
    Curve { p1: Point, p2: Point, p3: Point },
}

/// User-driven placement applied after the trace is fitted to the frame.
/// Identity by default; the core never mutates these.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParameters {
    pub x_offset: f64,
    pub y_offset: f64,
    pub x_scale: f64,
    pub y_scale: f64,
    pub rotation_degrees: f64,
}

impl Default for TransformParameters {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            x_scale: 1.0,
            y_scale: 1.0,
            rotation_degrees: 0.0,
        }
    }
}

impl TransformParameters {
    pub fn is_identity(&self) -> bool {
        self.x_offset == 0.0
            && self.y_offset == 0.0
            && self.x_scale == 1.0
            && self.y_scale == 1.0
            && self.rotation_degrees == 0.0
    }
}

/// Per-line flags emitted into the sight file. The pipeline never toggles
/// these itself; they exist for callers that want thousandth-unit coordinates
/// or move-without-draw strokes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SightFlags {
    pub thousandth: bool,
    pub move_without_draw: bool,
}
