use js_sys::Float64Array;
use reticle::LineSegment;

pub fn arr_f64(slice: &[f64]) -> Float64Array {
    let arr = Float64Array::new_with_length(slice.len() as u32);
    arr.copy_from(slice);
    arr
}

/// Flatten segments into [x0, y0, x1, y1, ...] for canvas rendering.
pub fn flat_coords(lines: &[LineSegment]) -> Vec<f64> {
    let mut out = Vec::with_capacity(lines.len() * 4);
    for l in lines {
        out.push(l.start.x);
        out.push(l.start.y);
        out.push(l.end.x);
        out.push(l.end.y);
    }
    out
}
