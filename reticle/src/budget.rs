//! Segment budget allocation: divide a global line budget across bezier
//! curves, then flatten each curve into its allotted number of straight
//! segments.
//!
//! The allocator hands out segments in whole rounds while the budget allows,
//! then spends the remainder one segment at a time on the longest curve that
//! has not yet received this round's increment. Curve length is the control
//! polygon length, a chord proxy consumers of the output rely on.

use crate::geometry::math::{control_polygon_length, cubic_point};
use crate::model::{CubicBezier, LineSegment, LINE_LIMIT};

#[derive(Clone, Copy, Debug)]
struct BudgetEntry {
    length: f64,
    segments: u32,
}

/// Assign each curve a segment count under `max_lines` total, then flatten.
///
/// `max_lines` of 0 falls back to the global line limit. `max_segments_per_curve`
/// of 0 falls back to `ceil(max_lines / curves.len())`.
pub fn allocate(
    curves: &[CubicBezier],
    max_lines: u32,
    max_segments_per_curve: u32,
) -> Vec<LineSegment> {
    let counts = segment_counts(curves, max_lines, max_segments_per_curve);
    let mut lines = Vec::new();
    for (curve, &k) in curves.iter().zip(counts.iter()) {
        flatten(curve, k, &mut lines);
    }
    lines
}

/// The per-curve allocation, exposed separately so callers can inspect how
/// the budget was spent.
pub fn segment_counts(curves: &[CubicBezier], max_lines: u32, max_segments_per_curve: u32) -> Vec<u32> {
    if curves.is_empty() {
        return Vec::new();
    }
    let max_lines = if max_lines == 0 { LINE_LIMIT } else { max_lines };
    let max_segments = if max_segments_per_curve == 0 {
        // ceil(max_lines / curves.len())
        (max_lines + curves.len() as u32 - 1) / curves.len() as u32
    } else {
        max_segments_per_curve
    };

    let mut entries: Vec<BudgetEntry> = curves
        .iter()
        .map(|c| BudgetEntry {
            length: control_polygon_length(c),
            segments: 0,
        })
        .collect();

    let count = entries.len() as u32;
    let mut total: u32 = 0;
    let mut rounds: u32 = 0;
    while total < max_lines && rounds < max_segments {
        // Enough budget left for a full round: one more segment everywhere.
        if total + count <= max_lines {
            for e in entries.iter_mut() {
                e.segments += 1;
            }
            total += count;
            rounds += 1;
            continue;
        }

        // Scarce remainder: the longest curve that has not yet received this
        // round's increment gets one segment. Strict comparison, so ties go
        // to the earliest curve; zero-length curves never win.
        let mut best: Option<usize> = None;
        let mut best_length = 0.0;
        for (i, e) in entries.iter().enumerate() {
            if best_length < e.length && e.segments < rounds + 1 {
                best_length = e.length;
                best = Some(i);
            }
        }
        if let Some(i) = best {
            entries[i].segments += 1;
        }
        total += 1;
    }

    entries.iter().map(|e| e.segments).collect()
}

/// Flatten one curve into `k` chained segments by evaluating at t = i/k.
/// The loop bound carries 1/(2k) of slack to absorb floating-point step
/// accumulation. k = 0 contributes nothing: the curve is dropped.
fn flatten(curve: &CubicBezier, k: u32, out: &mut Vec<LineSegment>) {
    if k == 0 {
        return;
    }
    let step = 1.0 / k as f64;
    let bound = 1.0 + step / 2.0;
    let mut prev = curve.p0;
    let mut t = step;
    while t <= bound {
        let end = cubic_point(curve, t);
        out.push(LineSegment::new(prev, end));
        prev = end;
        t += step;
    }
}

/// Drop lines shorter than `threshold`.
pub fn trim_lines(lines: Vec<LineSegment>, threshold: f64) -> Vec<LineSegment> {
    lines.into_iter().filter(|l| l.length() >= threshold).collect()
}

/// Drop curves whose control polygon is shorter than `threshold`.
pub fn trim_curves(curves: Vec<CubicBezier>, threshold: f64) -> Vec<CubicBezier> {
    curves
        .into_iter()
        .filter(|c| control_polygon_length(c) >= threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    // A curve whose control polygon is `len` long.
    fn curve_of_length(len: f64) -> CubicBezier {
        CubicBezier::new(
            pt(0.0, 0.0),
            pt(len / 3.0, 0.0),
            pt(2.0 * len / 3.0, 0.0),
            pt(len, 0.0),
        )
    }

    #[test]
    fn empty_input_allocates_nothing() {
        assert!(allocate(&[], 100, 0).is_empty());
    }

    #[test]
    fn remainder_goes_to_longest_curve() {
        // Round 1 gives both +1 (2 used); the last line goes to the longer.
        let curves = [curve_of_length(10.0), curve_of_length(5.0)];
        let counts = segment_counts(&curves, 3, 0);
        assert_eq!(counts, vec![2, 1]);
    }

    #[test]
    fn ties_break_to_first_in_input_order() {
        let curves = [curve_of_length(5.0), curve_of_length(5.0)];
        let counts = segment_counts(&curves, 3, 0);
        assert_eq!(counts, vec![2, 1]);
    }

    #[test]
    fn full_rounds_share_evenly() {
        let curves = [curve_of_length(9.0), curve_of_length(1.0)];
        let counts = segment_counts(&curves, 10, 0);
        assert_eq!(counts, vec![5, 5]);
    }

    #[test]
    fn max_segments_per_curve_caps_rounds() {
        let curves = [curve_of_length(10.0)];
        let counts = segment_counts(&curves, 100, 3);
        assert_eq!(counts, vec![3]);
    }

    #[test]
    fn emitted_segments_match_counts() {
        let curves = [curve_of_length(10.0), curve_of_length(4.0), curve_of_length(7.0)];
        let counts = segment_counts(&curves, 17, 0);
        let lines = allocate(&curves, 17, 0);
        assert_eq!(lines.len() as u32, counts.iter().sum::<u32>());
    }

    #[test]
    fn flattened_curve_chains_from_p0_to_p3() {
        let c = CubicBezier::new(pt(0.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0), pt(1.0, 0.0));
        let lines = allocate(&[c], 8, 8);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].start, c.p0);
        assert!((lines[7].end.x - 1.0).abs() < 1e-9);
        assert!((lines[7].end.y - 0.0).abs() < 1e-9);
        for pair in lines.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn zero_length_curves_compete_last() {
        let p = pt(1.0, 1.0);
        let degenerate = CubicBezier::new(p, p, p, p);
        let curves = [degenerate, curve_of_length(3.0)];
        // 3 lines: one round for both, scarce line must skip the degenerate.
        let counts = segment_counts(&curves, 3, 0);
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn zero_max_lines_defaults_to_global_limit() {
        let curves = [curve_of_length(2.0)];
        let lines = allocate(&curves, 0, 0);
        assert_eq!(lines.len() as u32, LINE_LIMIT);
    }

    #[test]
    fn trim_drops_short_primitives() {
        let lines = vec![
            LineSegment::new(pt(0.0, 0.0), pt(1.0, 0.0)),
            LineSegment::new(pt(0.0, 0.0), pt(0.001, 0.0)),
        ];
        assert_eq!(trim_lines(lines, 0.01).len(), 1);
        let curves = vec![curve_of_length(5.0), curve_of_length(0.001)];
        assert_eq!(trim_curves(curves, 0.01).len(), 1);
    }
}
