//! Decimal rounding helpers for report fields.
//!
//! Rounding is a presentation contract of the reports, not a precision
//! requirement: internal computation keeps full f64 precision and rounds
//! only when a value is stored into a report.

/// Round a value to the given number of decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round a value to two decimal places.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round a value to three decimal places.
pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}
