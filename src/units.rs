//! Time unit conversions.

/// Seconds per Julian day.
pub const JULIAN_DAY: f64 = 86_400.0;
/// Seconds per Julian year (365.25 Julian days).
pub const JULIAN_YEAR: f64 = 365.25 * JULIAN_DAY;

#[inline]
pub fn julian_years_to_seconds(julian_years: f64) -> f64 {
    julian_years * JULIAN_YEAR
}

#[inline]
pub fn seconds_to_julian_years(seconds: f64) -> f64 {
    seconds / JULIAN_YEAR
}

#[inline]
pub fn julian_days_to_seconds(julian_days: f64) -> f64 {
    julian_days * JULIAN_DAY
}

#[inline]
pub fn seconds_to_julian_days(seconds: f64) -> f64 {
    seconds / JULIAN_DAY
}
