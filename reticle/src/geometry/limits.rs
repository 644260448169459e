// Centralized ingestion limits to harden against untrusted SVG input

pub const MAX_SVG_BYTES: usize = 8 * 1024 * 1024; // whole document
pub const MAX_PATH_COMMANDS: usize = 200_000;
pub const MAX_COORDS_PER_COMMAND: usize = 64;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool {
    x.is_finite() && x >= COORD_MIN && x <= COORD_MAX
}
