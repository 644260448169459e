//! JSON interchange for line sets, the shape host UIs pass around:
//! `[[x0, y0, x1, y1], ...]`.

use crate::error::ConvertError;
use crate::geometry::limits;
use crate::model::{LineSegment, Point};
use serde_json::{json, Value};

pub fn lines_to_json(lines: &[LineSegment]) -> Value {
    Value::Array(
        lines
            .iter()
            .map(|l| json!([l.start.x, l.start.y, l.end.x, l.end.y]))
            .collect(),
    )
}

pub fn lines_from_json(v: &Value) -> Result<Vec<LineSegment>, ConvertError> {
    let arr = v
        .as_array()
        .ok_or_else(|| ConvertError::MalformedInput("expected an array of lines".into()))?;
    let mut out = Vec::with_capacity(arr.len());
    for entry in arr {
        let quad = entry
            .as_array()
            .filter(|a| a.len() == 4)
            .ok_or_else(|| ConvertError::MalformedInput("line must be [x0, y0, x1, y1]".into()))?;
        let mut c = [0.0f64; 4];
        for (i, item) in quad.iter().enumerate() {
            let x = item
                .as_f64()
                .ok_or_else(|| ConvertError::MalformedInput("line coordinate must be a number".into()))?;
            if !limits::in_coord_bounds(x) {
                return Err(ConvertError::MalformedInput(format!(
                    "coordinate {x} out of bounds"
                )));
            }
            c[i] = x;
        }
        out.push(LineSegment::new(Point::new(c[0], c[1]), Point::new(c[2], c[3])));
    }
    Ok(out)
}
