use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a prefix operator applied to an already evaluated operand.
    ///
    /// - `+` returns a number unchanged.
    /// - `-` negates a number, keeping its type; integer negation is checked.
    /// - `!` negates a boolean.
    ///
    /// # Errors
    /// - `TypeMismatch` if the operand has the wrong type.
    /// - `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Float(2.5), 1).unwrap();
    /// assert_eq!(v, Value::Float(-2.5));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::from("a"), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, Value::Integer(_) | Value::Float(_)) => Ok(value.clone()),
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (UnaryOperator::Negate, Value::Float(r)) => Ok(Value::Float(-r)),
            (UnaryOperator::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
            _ => {
                Err(RuntimeError::TypeMismatch { details: format!("operator '{op}' cannot be \
                                                                   applied to {}",
                                                                  value.type_name()),
                                                 line })
            },
        }
    }
}
