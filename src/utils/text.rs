//! Small numeric and string helpers shared by the analyzers.

/// Returns at most `max` characters of `s`, never splitting a character.
pub fn preview(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Rounds `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Formats `count / total * 100` as a two-decimal percentage string.
///
/// A zero `total` yields `"0.00%"` rather than `NaN`.
pub fn density(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", count as f64 / total as f64 * 100.0)
}
