//! Numeric value generators.

use super::GeneratedValue;
use rand::Rng;

/// Upper bound used by generators whose maximum is left open.
pub const DEFAULT_MAX_NUMBER: i64 = 2_147_483_647;

/// Generate a random integer in the given range (inclusive).
pub fn generate_number_between<R: Rng>(rng: &mut R, min: i64, max: i64) -> GeneratedValue {
    GeneratedValue::Int(rng.gen_range(min..=max))
}

/// Generate a random number with at most `digits` digits, or up to
/// [`DEFAULT_MAX_NUMBER`] when no digit count is given.
pub fn generate_random_number<R: Rng>(rng: &mut R, digits: Option<u32>) -> GeneratedValue {
    let max = match digits {
        Some(0) => 0,
        Some(d) => 10_i64.pow(d) - 1,
        None => DEFAULT_MAX_NUMBER,
    };
    GeneratedValue::Int(rng.gen_range(0..=max))
}

/// Generate a random float in the given range, rounded to `decimals` places.
pub fn generate_random_float<R: Rng>(rng: &mut R, decimals: u32, min: f64, max: f64) -> GeneratedValue {
    let value = if min < max {
        rng.gen_range(min..=max)
    } else {
        min
    };
    let factor = 10_f64.powi(decimals as i32);
    GeneratedValue::Float((value * factor).round() / factor)
}

/// Generate a boolean that is `true` with `chance_of_true` percent probability.
pub fn generate_boolean<R: Rng>(rng: &mut R, chance_of_true: u8) -> GeneratedValue {
    GeneratedValue::Bool(rng.gen_ratio(u32::from(chance_of_true.min(100)), 100))
}
