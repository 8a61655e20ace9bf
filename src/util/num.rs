/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use minic::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!"), Ok(42.0));
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts a shift amount to the `u32` the checked shift operations take.
///
/// Returns `None` for negative amounts and for amounts of 64 or more, which
/// would shift every bit out of an `i64`.
///
/// ## Example
/// ```
/// use minic::util::num::shift_amount;
///
/// assert_eq!(shift_amount(3), Some(3));
/// assert_eq!(shift_amount(-1), None);
/// assert_eq!(shift_amount(64), None);
/// ```
#[must_use]
pub fn shift_amount(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|&n| n < i64::BITS)
}
