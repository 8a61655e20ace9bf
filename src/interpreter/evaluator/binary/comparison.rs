use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{is_close, is_greater, is_less, operand_mismatch},
        },
        value::core::Value,
    },
};

/// Maps a comparison operator and an exact ordering to the final boolean.
///
/// Used for integers and strings, which compare without tolerance.
#[must_use]
pub fn ordering_result(op: BinaryOperator, ordering: Ordering) -> bool {
    match op {
        BinaryOperator::Equal => ordering == Ordering::Equal,
        BinaryOperator::NotEqual => ordering != Ordering::Equal,
        BinaryOperator::Less => ordering == Ordering::Less,
        BinaryOperator::Greater => ordering == Ordering::Greater,
        BinaryOperator::LessEqual => ordering != Ordering::Greater,
        BinaryOperator::GreaterEqual => ordering != Ordering::Less,
        _ => unreachable!("ordering_result used with non comparison operator"),
    }
}

/// Compares two floats under `op` with a tolerance of `epsilon`.
///
/// Values closer than `epsilon` are equal, and only values further apart
/// are ordered; `<=` and `>=` accept either.
///
/// # Example
/// ```
/// use minic::{ast::BinaryOperator, interpreter::evaluator::binary::comparison::float_result};
///
/// assert!(float_result(BinaryOperator::Equal, 1.00005, 1.0001, 1e-4));
/// assert!(!float_result(BinaryOperator::Less, 1.00005, 1.0001, 1e-4));
/// assert!(float_result(BinaryOperator::LessEqual, 1.00005, 1.0001, 1e-4));
/// ```
#[must_use]
pub fn float_result(op: BinaryOperator, a: f64, b: f64, epsilon: f64) -> bool {
    match op {
        BinaryOperator::Equal => is_close(a, b, epsilon),
        BinaryOperator::NotEqual => !is_close(a, b, epsilon),
        BinaryOperator::Less => is_less(a, b, epsilon),
        BinaryOperator::Greater => is_greater(a, b, epsilon),
        BinaryOperator::LessEqual => is_less(a, b, epsilon) || is_close(a, b, epsilon),
        BinaryOperator::GreaterEqual => is_greater(a, b, epsilon) || is_close(a, b, epsilon),
        _ => unreachable!("float_result used with non comparison operator"),
    }
}

impl Context {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// Two integers compare exactly. As soon as one side is a float both are
    /// compared as floats with the context's tolerance. Strings compare
    /// lexicographically and booleans support `==` and `!=` only.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let a = Value::Float(3.0);
    /// let b = Value::Integer(5);
    ///
    /// let result = context.eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_comparison(&self,
                           op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use Value::{Boolean, Float, Integer, String};

        Ok(Boolean(match (left, right) {
                       (Integer(a), Integer(b)) => ordering_result(op, a.cmp(b)),
                       (Integer(_) | Float(_), Integer(_) | Float(_)) => {
                           let a = left.as_float(line)?;
                           let b = right.as_float(line)?;
                           float_result(op, a, b, self.epsilon)
                       },
                       (String(a), String(b)) => ordering_result(op, a.cmp(b)),
                       (Boolean(a), Boolean(b))
                           if matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual) =>
                       {
                           ordering_result(op, a.cmp(b))
                       },
                       _ => return Err(operand_mismatch(op, left, right, line)),
                   }))
    }
}
