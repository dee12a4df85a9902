//! Number utilities
//!
//! Random integers, parity checks, min/max over slices, thousands separators
//! and decimal rounding. None of these validate their input: NaN and
//! infinities propagate the way IEEE-754 arithmetic makes them.

use std::fmt::Display;

use rand::Rng;
use serde_json::Value;

/// Random integer in `[min, max]`, inclusive on both ends
///
/// Uses the thread-local RNG. See [`random_number_with`] to inject one.
///
/// # Examples
///
/// ```
/// use awesome_common::number::random_number;
///
/// let n = random_number(1, 6);
/// assert!((1..=6).contains(&n));
/// ```
#[must_use]
pub fn random_number(min: i64, max: i64) -> i64 {
    random_number_with(&mut rand::thread_rng(), min, max)
}

/// Random integer in `[min, max]` drawn from `rng`
///
/// Computed as `floor(u * (max - min + 1)) + min` with `u` uniform in
/// `[0, 1)`. Callers are expected to pass `min <= max`; the result for an
/// inverted range is not meaningful but never panics.
pub fn random_number_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let span = (i128::from(max) - i128::from(min) + 1) as f64;
    let offset = (rng.gen::<f64>() * span).floor() as i128;
    i64::try_from(i128::from(min) + offset).unwrap_or(max)
}

/// Whether `n` is even
#[must_use]
pub fn is_even(n: f64) -> bool {
    n % 2.0 == 0.0
}

/// Whether `n` is odd
///
/// Uses the absolute remainder so negative odd numbers qualify.
#[must_use]
pub fn is_odd(n: f64) -> bool {
    (n % 2.0).abs() == 1.0
}

/// Whether a JSON value holds a number
///
/// `serde_json` cannot represent NaN, so every `Value::Number` qualifies.
#[must_use]
pub const fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// Narrow a JSON value to `f64`, rejecting non-numbers and NaN
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| !n.is_nan())
}

/// Largest element of `values`, or `None` when empty
///
/// Elements that do not compare (NaN) are skipped over.
#[must_use]
pub fn find_max<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(|best, v| if v > best { v } else { best })
}

/// Smallest element of `values`, or `None` when empty
#[must_use]
pub fn find_min<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(|best, v| if v < best { v } else { best })
}

/// Insert comma thousands separators into the decimal form of `n`
///
/// Every run of digits is grouped in threes from its right end, the
/// fractional part included, so `1234.5678` becomes `"1,234.5,678"`. A
/// leading sign and the decimal point are copied through.
///
/// # Examples
///
/// ```
/// use awesome_common::number::format_number;
///
/// assert_eq!(format_number(1234567890), "1,234,567,890");
/// assert_eq!(format_number(-1234.5), "-1,234.5");
/// assert_eq!(format_number(1234.5678), "1,234.5,678");
/// ```
pub fn format_number<T: Display>(n: T) -> String {
    let text = n.to_string();
    let mut grouped = String::with_capacity(text.len() + text.len() / 3);
    let mut rest = text.as_str();

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        grouped.push_str(&rest[..start]);
        let run = &rest[start..];
        let len = run.find(|c: char| !c.is_ascii_digit()).unwrap_or(run.len());
        push_grouped(&mut grouped, &run[..len]);
        rest = &run[len..];
    }
    grouped.push_str(rest);
    grouped
}

fn push_grouped(out: &mut String, digits: &str) {
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
}

/// Round `n` to `places` decimal places, halves rounding up
///
/// Scales, rounds and scales back, so it inherits binary floating point
/// error: `round_to(1.005, 2)` is `1.0` because `1.005 * 100` is slightly
/// below `100.5`.
///
/// # Examples
///
/// ```
/// use awesome_common::number::round_to;
///
/// assert_eq!(round_to(3.14159, 2), 3.14);
/// assert_eq!(round_to(-2.5, 0), -2.0);
/// ```
#[must_use]
pub fn round_to(n: f64, places: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let scaled = n * factor;
    let mut rounded = scaled.round();
    // f64::round moves halves away from zero; negative halves go up instead
    if scaled - rounded == 0.5 {
        rounded += 1.0;
    }
    rounded / factor
}

/// [`round_to`] with the default of two decimal places
#[must_use]
pub fn round_to2(n: f64) -> f64 {
    round_to(n, 2)
}
