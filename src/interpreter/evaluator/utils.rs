use crate::{
    error::RuntimeError,
    interpreter::{
        environment::ScopeId,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Checks whether two floats are equal within `epsilon`.
///
/// # Example
/// ```
/// use minic::interpreter::evaluator::utils::is_close;
///
/// assert!(is_close(1.00005, 1.0001, 1e-4));
/// assert!(!is_close(1.0, 1.1, 1e-4));
/// ```
#[must_use]
pub fn is_close(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// `a < b` with a margin of `epsilon`: values within the margin are not
/// ordered.
#[must_use]
pub fn is_less(a: f64, b: f64, epsilon: f64) -> bool {
    a < b - epsilon
}

/// `a > b` with a margin of `epsilon`.
#[must_use]
pub fn is_greater(a: f64, b: f64, epsilon: f64) -> bool {
    a > b + epsilon
}

/// Builds the error for an operator applied to operands it does not
/// support.
#[must_use]
pub fn operand_mismatch(op: impl std::fmt::Display,
                        left: &Value,
                        right: &Value,
                        line: usize)
                        -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("operator '{op}' cannot be applied to {} and {}",
                                                  left.type_name(),
                                                  right.type_name()),
                                 line }
}

impl Context {
    /// Looks up a variable, walking outward from `scope`.
    ///
    /// # Errors
    /// `UndefinedIdentifier` if no enclosing scope binds the name.
    pub fn eval_symbol(&self, name: &str, scope: ScopeId, line: usize) -> EvalResult<Value> {
        self.env
            .get(scope, name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: name.to_string(),
                                                               line })
    }
}
