use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::ScopeId,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// The operands are converted to booleans using `as_bool`. Both operands
    /// are already evaluated here; source-level `&&` and `||` go through
    /// `eval_short_circuit` instead.
    ///
    /// # Parameters
    /// - `op`: The logical operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Boolean(true);
    /// let b = Value::Boolean(false);
    ///
    /// let result = Context::eval_logic(BinaryOperator::Or, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        match op {
            BinaryOperator::And => Ok(Value::Boolean(left.as_bool(line)? && right.as_bool(line)?)),
            BinaryOperator::Or => Ok(Value::Boolean(left.as_bool(line)? || right.as_bool(line)?)),
            _ => unreachable!("eval_logic used with non logical operator"),
        }
    }

    /// Evaluates `&&` or `||`, skipping the right operand when the left one
    /// already decides the result.
    pub(in crate::interpreter::evaluator) fn eval_short_circuit(&mut self,
                                                                op: BinaryOperator,
                                                                left: &Expr,
                                                                right: &Expr,
                                                                scope: ScopeId,
                                                                line: usize)
                                                                -> EvalResult<Value> {
        let left = self.eval(left, scope)?.as_bool(line)?;
        match (op, left) {
            (BinaryOperator::And, false) => Ok(Value::Boolean(false)),
            (BinaryOperator::Or, true) => Ok(Value::Boolean(true)),
            _ => Ok(Value::Boolean(self.eval(right, scope)?.as_bool(line)?)),
        }
    }
}
