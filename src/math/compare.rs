/// Returns whether `a` and `b` are equal up to `epsilon` scaled by their magnitude.
///
/// The comparison is `|a - b| <= epsilon * max(1, |a|, |b|)`, so the
/// tolerance is absolute near zero and relative for large magnitudes.
/// Non-finite values are only equal to themselves.
#[must_use]
pub fn near_eq(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let scale = 1.0_f64.max(a.abs()).max(b.abs());
    (a - b).abs() <= epsilon * scale
}

/// Rounds `value` to `digits` decimal places, half away from zero.
///
/// Non-finite values are returned unchanged.
#[must_use]
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10.0_f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = value * factor;
    // Past 2^52 every f64 is already an integer.
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        return value;
    }
    scaled.round() / factor
}
