use thiserror::Error;

/// Errors that can occur while converting a traced SVG into a sight file.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// The SVG text has no `<path>`/`d` attribute, a command carried the
    /// wrong number of coordinates, or a coordinate failed to parse.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The traced geometry collapses to a point or a single axis, so no
    /// finite scale can fit it into the sight frame.
    #[error("degenerate geometry: bounding box is {width} x {height}")]
    DegenerateGeometry { width: f64, height: f64 },
}
