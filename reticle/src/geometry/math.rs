use crate::model::{CubicBezier, Point};

/// Evaluate a cubic Bézier at parameter t ∈ [0, 1].
pub fn cubic_point(curve: &CubicBezier, t: f64) -> Point {
    let u = 1.0 - t;
    let tt = t * t;
    let uu = u * u;
    let uuu = uu * u;
    let ttt = tt * t;
    Point {
        x: uuu * curve.p0.x + 3.0 * uu * t * curve.p1.x + 3.0 * u * tt * curve.p2.x + ttt * curve.p3.x,
        y: uuu * curve.p0.y + 3.0 * uu * t * curve.p1.y + 3.0 * u * tt * curve.p2.y + ttt * curve.p3.y,
    }
}

#[inline]
pub fn dist(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Control-polygon length of a cubic: |P0P1| + |P1P2| + |P2P3|.
///
/// A chord proxy for arc length, not the true arc length. The budget
/// allocator only needs a consistent relative ordering of curve sizes, and
/// downstream consumers expect exactly this measure.
pub fn control_polygon_length(curve: &CubicBezier) -> f64 {
    dist(curve.p0, curve.p1) + dist(curve.p1, curve.p2) + dist(curve.p2, curve.p3)
}

/// Round to 3 decimal places.
#[inline]
pub fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
