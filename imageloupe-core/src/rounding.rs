//! Rounding rules shared by the scale and offset math.
//!
//! Halves always round toward positive infinity, for negative values too:
//! `-2.5` becomes `-2`, `2.5` becomes `3`.

/// Round to the nearest whole number, halves toward +∞.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to the nearest `1 / steps`. `round_to(x, 100.0)` keeps two decimals.
pub fn round_to(value: f64, steps: f64) -> f64 {
    round_half_up(value * steps) / steps
}
