//! SVG path ingestion and the preview serializer.
//!
//! Only the first `<path>` element's `d` attribute is consumed, and only the
//! absolute `M`, `L`, `C` commands; anything else the tracer might emit is
//! skipped. The command stream is folded into explicit line segments and
//! cubic curves carrying the running point as accumulator state.

use crate::error::ConvertError;
use crate::geometry::limits;
use crate::model::{CubicBezier, LineSegment, PathCommand, Point, FRAME_HEIGHT, FRAME_WIDTH};

/// Extract the first path's `d` attribute.
fn path_data(svg: &str) -> Result<&str, ConvertError> {
    if svg.len() > limits::MAX_SVG_BYTES {
        return Err(ConvertError::MalformedInput(format!(
            "document exceeds {} bytes",
            limits::MAX_SVG_BYTES
        )));
    }
    let path_at = svg
        .find("<path")
        .ok_or_else(|| ConvertError::MalformedInput("no <path> element".into()))?;
    let rel = svg[path_at..]
        .find("d=\"")
        .ok_or_else(|| ConvertError::MalformedInput("path has no d attribute".into()))?;
    let start = path_at + rel + 3;
    let end = svg[start..]
        .find('"')
        .ok_or_else(|| ConvertError::MalformedInput("unterminated d attribute".into()))?;
    Ok(&svg[start..start + end])
}

const COMMAND_LETTERS: &[char] = &[
    'M', 'm', 'L', 'l', 'C', 'c', 'H', 'h', 'V', 'v', 'S', 's', 'Q', 'q', 'T', 't', 'A', 'a',
    'Z', 'z',
];

/// Lookahead split: each piece begins with its command letter.
fn split_commands(d: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = d;
    std::iter::from_fn(move || {
        let trimmed = rest.trim_start();
        if trimmed.is_empty() {
            return None;
        }
        // Cut just before the next command letter after this one.
        let first_len = trimmed.chars().next().unwrap().len_utf8();
        let cut = trimmed[first_len..]
            .find(|c| COMMAND_LETTERS.contains(&c))
            .map(|i| i + first_len)
            .unwrap_or(trimmed.len());
        let (piece, tail) = trimmed.split_at(cut);
        rest = tail;
        Some(piece.trim_end())
    })
}

fn parse_coords(text: &str) -> Result<Vec<f64>, ConvertError> {
    let mut coords = Vec::new();
    for tok in text.split(|c: char| c.is_whitespace() || c == ',') {
        if tok.is_empty() {
            continue;
        }
        if coords.len() >= limits::MAX_COORDS_PER_COMMAND {
            return Err(ConvertError::MalformedInput(
                "too many coordinates in one command".into(),
            ));
        }
        let v: f64 = tok
            .parse()
            .map_err(|_| ConvertError::MalformedInput(format!("bad coordinate '{tok}'")))?;
        if !limits::in_coord_bounds(v) {
            return Err(ConvertError::MalformedInput(format!(
                "coordinate {v} out of bounds"
            )));
        }
        coords.push(v);
    }
    Ok(coords)
}

/// Tokenize the `d` string into typed commands. Unsupported command letters
/// are dropped here; wrong arity on a supported command is an error.
pub fn commands(d: &str) -> Result<Vec<PathCommand>, ConvertError> {
    let mut out = Vec::new();
    for piece in split_commands(d) {
        if out.len() >= limits::MAX_PATH_COMMANDS {
            return Err(ConvertError::MalformedInput("too many path commands".into()));
        }
        let letter = piece.chars().next().unwrap();
        let rest = &piece[letter.len_utf8()..];
        match letter {
            'M' => {
                let coords = parse_coords(rest)?;
                if coords.len() != 2 {
                    return Err(ConvertError::MalformedInput(format!(
                        "M expects 2 coordinates, got {}",
                        coords.len()
                    )));
                }
                out.push(PathCommand::Move(Point::new(coords[0], coords[1])));
            }
            'L' => {
                let coords = parse_coords(rest)?;
                let targets = match coords.len() {
                    2 => vec![Point::new(coords[0], coords[1])],
                    4 => vec![
                        Point::new(coords[0], coords[1]),
                        Point::new(coords[2], coords[3]),
                    ],
                    n => {
                        return Err(ConvertError::MalformedInput(format!(
                            "L expects 2 or 4 coordinates, got {n}"
                        )))
                    }
                };
                out.push(PathCommand::Line(targets));
            }
            'C' => {
                let coords = parse_coords(rest)?;
                if coords.len() != 6 {
                    return Err(ConvertError::MalformedInput(format!(
                        "C expects 6 coordinates, got {}",
                        coords.len()
                    )));
                }
                out.push(PathCommand::Curve {
                    p1: Point::new(coords[0], coords[1]),
                    p2: Point::new(coords[2], coords[3]),
                    p3: Point::new(coords[4], coords[5]),
                });
            }
            // No support for other svg commands; their payload is never inspected
            _ => continue,
        }
    }
    Ok(out)
}

/// Parse an SVG document into explicit line segments and cubic curves, in
/// path order. The running point starts at the origin.
pub fn parse(svg: &str) -> Result<(Vec<LineSegment>, Vec<CubicBezier>), ConvertError> {
    let d = path_data(svg)?;
    let mut lines = Vec::new();
    let mut curves = Vec::new();
    let mut cur = Point::new(0.0, 0.0);
    for cmd in commands(d)? {
        match cmd {
            PathCommand::Move(p) => cur = p,
            PathCommand::Line(targets) => {
                for target in &targets {
                    lines.push(LineSegment::new(cur, *target));
                    cur = *target;
                }
            }
            PathCommand::Curve { p1, p2, p3 } => {
                curves.push(CubicBezier::new(cur, p1, p2, p3));
                cur = p3;
            }
        }
    }
    Ok((lines, curves))
}

/// Render a line set back into a single-path SVG for previewing, mapped from
/// frame coordinates (origin-centered) into a `width` x `height` viewBox.
/// Consecutive segments that chain end-to-start merge into one `L` run.
pub fn to_svg(lines: &[LineSegment], width: f64, height: f64) -> String {
    let scale = height / FRAME_HEIGHT;
    let mut d = String::new();
    let mut prev: Option<Point> = None;
    for line in lines {
        let x0 = line.start.x * scale + width / 2.0;
        let y0 = line.start.y * scale + height / 2.0;
        let x1 = line.end.x * scale + width / 2.0;
        let y1 = line.end.y * scale + height / 2.0;
        if !d.is_empty() {
            d.push(' ');
        }
        match prev {
            Some(p) if p.x == x0 && p.y == y0 => {
                d.push_str(&format!("L {x1} {y1}"));
            }
            _ => {
                d.push_str(&format!("M {x0} {y0} L {x1} {y1}"));
            }
        }
        prev = Some(Point::new(x1, y1));
    }
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" height=\"100%\" viewBox=\"0 0 {width} {height}\" version=\"1.1\">\
<path d=\"{d}\" stroke=\"black\" fill=\"none\" fill-rule=\"evenodd\"></path></svg>"
    )
}

/// Default-size preview using the sight frame's aspect.
pub fn to_svg_frame(lines: &[LineSegment]) -> String {
    to_svg(lines, FRAME_WIDTH, FRAME_HEIGHT)
}
