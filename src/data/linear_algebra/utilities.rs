//! Helper algorithms for the `linear_algebra` module.
use std::collections::HashMap;
use std::hash::Hash;

use crate::data::linear_algebra::traits::NotZero;

/// Combine two sparse maps value by value.
///
/// Keys that are present in only one of the maps are combined with an implicit zero. Results that
/// are (numerically) zero are not stored.
///
/// # Arguments
///
/// * `left`: Values used as the first argument of `operation`.
/// * `right`: Values used as the second argument of `operation`.
/// * `operation`: Should map `(0, 0)` to `0`.
///
/// # Return value
///
/// A new map containing only nonzero values.
pub(super) fn merge_sparse<K, O>(
    left: &HashMap<K, f64>,
    right: &HashMap<K, f64>,
    operation: O,
) -> HashMap<K, f64>
where
    K: Hash + Eq + Copy,
    O: Fn(f64, f64) -> f64,
{
    let mut merged = HashMap::with_capacity(left.len() + right.len());
    for (&key, &value) in left {
        let right_value = right.get(&key).copied().unwrap_or(0f64);
        if let Some(result) = operation(value, right_value).into_not_zero() {
            merged.insert(key, result);
        }
    }
    for (&key, &value) in right.iter().filter(|&(key, _)| !left.contains_key(key)) {
        if let Some(result) = operation(0f64, value).into_not_zero() {
            merged.insert(key, result);
        }
    }

    merged
}

/// Significant digits shown when a value is rendered as text.
const SIGNIFICANT_DIGITS: i32 = 6;

/// Render a value with six significant digits, in the style of C's `%g`.
///
/// Fixed notation is used when the decimal exponent lies in `[-4, 6)`, scientific notation with a
/// signed, two-digit exponent otherwise. Trailing zeros and a trailing decimal point are removed.
pub(super) fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let infinity = if value > 0f64 { "inf" } else { "-inf" };
        return infinity.to_string();
    }
    if value == 0f64 {
        return "0".to_string();
    }

    // Exponent after rounding to the number of significant digits, so that 999999.5 counts as 1e6
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..SIGNIFICANT_DIGITS).contains(&exponent) {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

/// Strip trailing zeros after the decimal point, and the point itself if nothing remains.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Remove all values that are (numerically) zero.
///
/// Used after accumulating sums in place, where cancellation can leave tiny values behind.
pub(super) fn remove_zeros<K>(data: &mut HashMap<K, f64>) {
    data.retain(|_, value| value.is_not_zero());
}
