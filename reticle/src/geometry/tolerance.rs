// Centralized tolerances for floating-point geometry

pub const EPS_POS: f64 = 1e-9; // coordinate comparison slack
pub const EPS_LEN: f64 = 1e-12; // zero-length threshold

#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}
