//! Pure transforms over line sets: translate, scale, rotate, and the
//! contain-fit into the sight frame. Identity calls hand the input back
//! untouched.

use crate::error::ConvertError;
use crate::geometry::math::round3;
use crate::geometry::tolerance::EPS_LEN;
use crate::model::{LineSegment, Point, FRAME_HEIGHT, FRAME_WIDTH};

/// Axis-aligned bounding box over all segment endpoints.
/// Returns (min_x, min_y, max_x, max_y), or None for an empty set.
pub fn bounds(lines: &[LineSegment]) -> Option<(f64, f64, f64, f64)> {
    if lines.is_empty() {
        return None;
    }
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for line in lines {
        min_x = min_x.min(line.start.x).min(line.end.x);
        max_x = max_x.max(line.start.x).max(line.end.x);
        min_y = min_y.min(line.start.y).min(line.end.y);
        max_y = max_y.max(line.start.y).max(line.end.y);
    }
    Some((min_x, min_y, max_x, max_y))
}

/// Translate every endpoint by (dx, dy).
pub fn offset(lines: Vec<LineSegment>, dx: f64, dy: f64) -> Vec<LineSegment> {
    if lines.is_empty() || (dx == 0.0 && dy == 0.0) {
        return lines;
    }
    lines
        .into_iter()
        .map(|l| {
            LineSegment::new(
                Point::new(l.start.x + dx, l.start.y + dy),
                Point::new(l.end.x + dx, l.end.y + dy),
            )
        })
        .collect()
}

/// Multiply every endpoint by (sx, sy).
pub fn scale(lines: Vec<LineSegment>, sx: f64, sy: f64) -> Vec<LineSegment> {
    if lines.is_empty() || (sx == 1.0 && sy == 1.0) {
        return lines;
    }
    lines
        .into_iter()
        .map(|l| {
            LineSegment::new(
                Point::new(l.start.x * sx, l.start.y * sy),
                Point::new(l.end.x * sx, l.end.y * sy),
            )
        })
        .collect()
}

fn rotate_point(p: Point, origin: Point, radians: f64) -> Point {
    let (sin, cos) = radians.sin_cos();
    Point {
        x: origin.x + cos * (p.x - origin.x) - sin * (p.y - origin.y),
        y: origin.y + sin * (p.x - origin.x) + cos * (p.y - origin.y),
    }
}

/// Rotate every endpoint by `degrees` around `origin`. When `origin` is
/// omitted it is the midpoint of the bounding box, rounded to 3 decimals so
/// the pivot matches what a UI would display.
pub fn rotate(lines: Vec<LineSegment>, degrees: f64, origin: Option<Point>) -> Vec<LineSegment> {
    if lines.is_empty() || degrees == 0.0 {
        return lines;
    }
    let origin = origin.unwrap_or_else(|| {
        let (min_x, min_y, max_x, max_y) = bounds(&lines).unwrap();
        Point::new(
            round3((max_x - min_x) / 2.0 + min_x),
            round3((max_y - min_y) / 2.0 + min_y),
        )
    });
    let radians = degrees.to_radians();
    lines
        .into_iter()
        .map(|l| {
            LineSegment::new(
                rotate_point(l.start, origin, radians),
                rotate_point(l.end, origin, radians),
            )
        })
        .collect()
}

/// Center the line set on the origin and uniformly scale it to fit the
/// 1.78 x 1.0 sight frame (contain-fit, aspect preserved).
///
/// A bounding box with zero extent on either axis has no finite fit and is
/// rejected; single-point or collinear-only traces should never reach the
/// renderer.
pub fn fit_to_frame(lines: Vec<LineSegment>) -> Result<Vec<LineSegment>, ConvertError> {
    if lines.is_empty() {
        return Ok(lines);
    }
    let (min_x, min_y, max_x, max_y) = bounds(&lines).unwrap();
    let width = max_x - min_x;
    let height = max_y - min_y;
    if width <= EPS_LEN || height <= EPS_LEN {
        return Err(ConvertError::DegenerateGeometry { width, height });
    }

    let centered = offset(lines, -((max_x + min_x) / 2.0), -((max_y + min_y) / 2.0));
    let s = (FRAME_WIDTH / width).min(FRAME_HEIGHT / height);
    Ok(scale(centered, s, s))
}

/// Apply the user's placement: offset, then scale, then rotate. The order is
/// load-bearing; the offset acts in the pre-scale coordinate frame.
pub fn apply_user_transform(
    lines: Vec<LineSegment>,
    params: &crate::model::TransformParameters,
) -> Vec<LineSegment> {
    if lines.is_empty() || params.is_identity() {
        return lines;
    }
    let mut lines = lines;
    if params.x_offset != 0.0 || params.y_offset != 0.0 {
        lines = offset(lines, params.x_offset, params.y_offset);
    }
    if params.x_scale != 1.0 || params.y_scale != 1.0 {
        lines = scale(lines, params.x_scale, params.y_scale);
    }
    if params.rotation_degrees != 0.0 {
        lines = rotate(lines, params.rotation_degrees, None);
    }
    lines
}
