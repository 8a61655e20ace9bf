/// Binary expression dispatch.
///
/// Routes each operator to the handler for its category and implements the
/// left-to-right evaluation of operands.
pub mod core;

/// Arithmetic on numbers and strings.
///
/// Implements `+ - * /` with float promotion and string concatenation, and
/// the integer-only `% << >>`.
pub mod scalar;

/// Comparisons.
///
/// Exact comparison for integers and strings, tolerance-based comparison as
/// soon as a float is involved.
pub mod comparison;

/// Logical operators, including the short-circuiting source forms.
pub mod logic;
