//! Small numeric helpers shared by the resolver and the enumerator.

/// Rounds `value` to `places` decimal digits.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Maps NaN and infinities to zero so that garbage input degrades to the
/// zero result instead of poisoning every comparison downstream.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Formats a distance as `"X.XX m"`, or `"-"` when it is zero.
pub fn format_distance(metres: f64) -> String {
    if metres == 0.0 {
        "-".to_string()
    } else {
        format!("{metres:.2} m")
    }
}
