use reticle::geometry::transform;
use reticle::{convert, layout, ConvertError, ConvertParams, TransformParameters};

const TRACE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg">
<path d="M 10 10 L 30 10 C 30 10 40 30 20 30 C 10 30 10 20 10 10 z"/>
</svg>"#;

#[test]
fn end_to_end_produces_a_bounded_sight() {
    let result = convert(TRACE, &ConvertParams::default()).unwrap();
    assert!(result.sight.starts_with("crosshairHorVertSize:p2=3, 2"));
    assert!(result.sight.ends_with("\n    }"));
    assert_eq!(result.summary.explicit_lines, 1);
    assert_eq!(result.summary.curves, 2);
    assert!(!result.summary.budget_exhausted);
    assert!(result.summary.total_lines <= reticle::LINE_LIMIT);
    // fixture + one directive per final line
    assert_eq!(
        result.sight.matches("line:p4").count() as u32,
        result.summary.total_lines + 1
    );
}

#[test]
fn final_geometry_fits_the_frame() {
    let out = layout(TRACE, &ConvertParams::default()).unwrap();
    let (min_x, min_y, max_x, max_y) = transform::bounds(&out.lines).unwrap();
    assert!(max_x - min_x <= reticle::FRAME_WIDTH + 1e-9);
    assert!(max_y - min_y <= reticle::FRAME_HEIGHT + 1e-9);
    // contain-fit: one axis spans its frame dimension exactly
    let spans_w = (max_x - min_x - reticle::FRAME_WIDTH).abs() < 1e-9;
    let spans_h = (max_y - min_y - reticle::FRAME_HEIGHT).abs() < 1e-9;
    assert!(spans_w || spans_h);
}

#[test]
fn explicit_lines_exhausting_the_budget_starve_curves() {
    let svg = r#"<svg><path d="M 0 0 L 1 1 L 2 0 L 3 1 C 3 1 4 2 5 1"/></svg>"#;
    let params = ConvertParams {
        line_budget: 2,
        ..Default::default()
    };
    let out = layout(svg, &params).unwrap();
    assert!(out.summary.budget_exhausted);
    assert_eq!(out.summary.explicit_lines, 3);
    assert_eq!(out.summary.curve_lines, 0);
    // explicit lines are kept even past the budget; only curves are dropped
    assert_eq!(out.summary.total_lines, 3);
}

#[test]
fn tight_budget_splits_rounds_then_longest() {
    // two curves, three lines of budget: both get one, the longer gets two
    let svg = r#"<svg><path d="M 0 0 C 0 0 50 50 100 0 C 100 0 105 5 110 0"/></svg>"#;
    let params = ConvertParams {
        line_budget: 3,
        ..Default::default()
    };
    let out = layout(svg, &params).unwrap();
    assert_eq!(out.summary.curve_lines, 3);
    assert_eq!(out.summary.total_lines, 3);
}

#[test]
fn user_transform_is_applied_after_fitting() {
    let params = ConvertParams {
        transform: TransformParameters {
            x_scale: 0.5,
            y_scale: 0.5,
            ..Default::default()
        },
        ..Default::default()
    };
    let out = layout(TRACE, &params).unwrap();
    let (min_x, _, max_x, _) = transform::bounds(&out.lines).unwrap();
    let fitted = layout(TRACE, &ConvertParams::default()).unwrap();
    let (f_min_x, _, f_max_x, _) = transform::bounds(&fitted.lines).unwrap();
    assert!(((max_x - min_x) - (f_max_x - f_min_x) * 0.5).abs() < 1e-9);
}

#[test]
fn trim_threshold_drops_short_lines() {
    let base = layout(TRACE, &ConvertParams::default()).unwrap();
    let trimmed = layout(
        TRACE,
        &ConvertParams {
            trim_threshold: 0.2,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(trimmed.summary.total_lines < base.summary.total_lines);
    assert!(trimmed.lines.iter().all(|l| l.length() >= 0.2));
}

#[test]
fn collinear_trace_is_rejected_as_degenerate() {
    let svg = r#"<svg><path d="M 0 0 L 1 0 L 2 0"/></svg>"#;
    assert!(matches!(
        convert(svg, &ConvertParams::default()),
        Err(ConvertError::DegenerateGeometry { .. })
    ));
}

#[test]
fn pathless_document_is_rejected() {
    assert!(matches!(
        convert("<svg></svg>", &ConvertParams::default()),
        Err(ConvertError::MalformedInput(_))
    ));
}
