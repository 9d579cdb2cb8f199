//! Length rule: minimum-length flag and the continuous length ramp.

/// Minimum length (in characters) for the `length` rule to count as matched.
pub const MIN_LENGTH: usize = 8;

/// Length at which the ramp saturates.
const RAMP_TARGET: usize = 12;

/// Whether the password is long enough for the `length` rule flag.
pub fn meets_min_length(len: usize) -> bool {
    len >= MIN_LENGTH
}

/// Fraction of the length weight earned: `min(len / 12, 1)`.
///
/// A ramp rather than a step, so growth below 12 characters is still
/// rewarded continuously.
pub fn length_fraction(len: usize) -> f64 {
    (len as f64 / RAMP_TARGET as f64).min(1.0)
}
