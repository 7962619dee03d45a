//! Unit vocabulary helpers.
//!
//! Most units are plain count/measure tokens ("piece", "g", "ml"). A small
//! set is *qualitative*: the associated amount carries no numeric meaning
//! and must never take part in quantity comparison.

/// Unit tokens whose amounts are not numerically comparable.
pub const QUALITATIVE_UNITS: [&str; 5] = [
    "a pinch",
    "to taste",
    "as needed",
    "a dash",
    "to preference",
];

/// Whether `unit` is a qualitative token.
pub fn is_qualitative(unit: &str) -> bool {
    QUALITATIVE_UNITS.contains(&unit)
}

/// Render an amount for display.
///
/// Qualitative units render as the bare token ("to taste" rather than
/// "1to taste"); integral numeric amounts drop the decimal point.
pub fn format_amount(amount: f64, unit: &str) -> String {
    if is_qualitative(unit) {
        return unit.to_string();
    }
    if amount.fract() == 0.0 {
        format!("{}{}", amount as i64, unit)
    } else {
        format!("{amount}{unit}")
    }
}
