//! reticle: traced SVG outline → game sight-file conversion.
//!
//! The pipeline is parse → budget → transform → render, purely synchronous
//! and stateless across calls; every request owns its intermediates.

pub mod model;
pub mod error;
pub mod geometry {
    pub mod limits;
    pub mod math;
    pub mod tolerance;
    pub mod transform;
}
pub mod blk;
pub mod budget;
pub mod json;
pub mod svg;

use serde::{Deserialize, Serialize};

pub use error::ConvertError;
pub use model::{CubicBezier, LineSegment, Point, SightFlags, TransformParameters};
pub use model::{FRAME_HEIGHT, FRAME_WIDTH, LINE_LIMIT};

/// Caller-supplied knobs for one conversion. Zero values mean "default":
/// the global line limit and an automatically derived per-curve cap.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertParams {
    pub line_budget: u32,
    pub max_segments_per_curve: u32,
    /// Drop final lines shorter than this; 0 disables trimming.
    pub trim_threshold: f64,
    pub transform: TransformParameters,
    pub flags: SightFlags,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            line_budget: 0,
            max_segments_per_curve: 0,
            trim_threshold: 0.0,
            transform: TransformParameters::default(),
            flags: SightFlags::default(),
        }
    }
}

/// What a conversion produced, numerically. `budget_exhausted` flags inputs
/// whose explicit lines alone consumed the whole budget, leaving nothing for
/// curve subdivision; the output is then truncated relative to source detail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvertSummary {
    pub explicit_lines: u32,
    pub curves: u32,
    pub curve_lines: u32,
    pub total_lines: u32,
    pub budget_exhausted: bool,
}

/// The placed line set plus its summary, before rendering.
#[derive(Clone, Debug)]
pub struct Layout {
    pub lines: Vec<LineSegment>,
    pub summary: ConvertSummary,
}

/// A rendered sight file plus its summary.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Conversion {
    pub sight: String,
    pub summary: ConvertSummary,
}

/// Parse, budget, fit, and place the geometry without rendering it.
pub fn layout(svg_text: &str, params: &ConvertParams) -> Result<Layout, ConvertError> {
    let (explicit, curves) = svg::parse(svg_text)?;

    let budget = if params.line_budget == 0 {
        LINE_LIMIT
    } else {
        params.line_budget
    };
    let explicit_count = explicit.len() as u32;
    let budget_exhausted = explicit_count >= budget;
    let curve_lines = if budget_exhausted {
        Vec::new()
    } else {
        budget::allocate(&curves, budget - explicit_count, params.max_segments_per_curve)
    };

    let mut summary = ConvertSummary {
        explicit_lines: explicit_count,
        curves: curves.len() as u32,
        curve_lines: curve_lines.len() as u32,
        total_lines: 0,
        budget_exhausted,
    };

    let mut lines = explicit;
    lines.extend(curve_lines);
    let lines = geometry::transform::fit_to_frame(lines)?;
    let mut lines = geometry::transform::apply_user_transform(lines, &params.transform);
    if params.trim_threshold > 0.0 {
        lines = budget::trim_lines(lines, params.trim_threshold);
    }
    summary.total_lines = lines.len() as u32;
    Ok(Layout { lines, summary })
}

/// Full conversion: traced SVG text in, sight-file text out.
pub fn convert(svg_text: &str, params: &ConvertParams) -> Result<Conversion, ConvertError> {
    let layout = layout(svg_text, params)?;
    Ok(Conversion {
        sight: blk::render(&layout.lines, params.flags),
        summary: layout.summary,
    })
}
