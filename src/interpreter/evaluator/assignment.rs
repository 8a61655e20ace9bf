use crate::{
    ast::{AssignOperator, BinaryOperator, Expr, UpdateOperator},
    error::RuntimeError,
    interpreter::{
        environment::ScopeId,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates `target = value` or a compound assignment.
    ///
    /// The right-hand side is evaluated first. Plain `=` then overwrites the
    /// nearest binding of `target`; the compound forms combine the current
    /// value with the right-hand side through `eval_compound`. The expression
    /// yields the newly stored value.
    ///
    /// # Errors
    /// - `UndefinedIdentifier` if no enclosing scope binds `target`.
    /// - Whatever `eval_compound` reports for the compound forms.
    pub(in crate::interpreter::evaluator) fn eval_assignment(&mut self,
                                                             op: AssignOperator,
                                                             target: &str,
                                                             value: &Expr,
                                                             scope: ScopeId,
                                                             line: usize)
                                                             -> EvalResult<Value> {
        let rhs = self.eval(value, scope)?;
        let current = self.eval_symbol(target, scope, line)?;

        let new_value = match op.arithmetic() {
            None => rhs,
            Some(arith) => Self::eval_compound(arith, &current, &rhs, line)?,
        };

        self.env.assign(scope, target, new_value.clone());
        Ok(new_value)
    }

    /// Combines the current value of a variable with the right-hand side of
    /// a compound assignment.
    ///
    /// Unlike the plain binary operators, compound assignment never mixes
    /// types: both sides must be integers, both floats, or both strings, and
    /// strings only support `+=`.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let joined = Context::eval_compound(BinaryOperator::Add,
    ///                                     &Value::from("a"),
    ///                                     &Value::from("b"),
    ///                                     1);
    /// assert_eq!(joined.unwrap(), Value::from("ab"));
    ///
    /// assert!(Context::eval_compound(BinaryOperator::Sub,
    ///                                &Value::from("a"),
    ///                                &Value::from("b"),
    ///                                1).is_err());
    /// assert!(Context::eval_compound(BinaryOperator::Add,
    ///                                &Value::Integer(1),
    ///                                &Value::Float(1.0),
    ///                                1).is_err());
    /// ```
    pub fn eval_compound(op: BinaryOperator,
                         current: &Value,
                         rhs: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        match (current, rhs) {
            (Value::Integer(_), Value::Integer(_)) | (Value::Float(_), Value::Float(_)) => {
                Self::eval_arithmetic(op, current, rhs, line)
            },
            (Value::String(_), Value::String(_)) if op == BinaryOperator::Add => {
                Self::eval_arithmetic(op, current, rhs, line)
            },
            _ => {
                Err(RuntimeError::TypeMismatch { details: format!("'{op}=' cannot combine {} \
                                                                   with {}",
                                                                  current.type_name(),
                                                                  rhs.type_name()),
                                                 line })
            },
        }
    }

    /// Evaluates `++` or `--` on a variable.
    ///
    /// Integers change by one (checked), floats by `1.0`. The prefix form
    /// yields the updated value, the postfix form the value before the
    /// update.
    ///
    /// # Errors
    /// - `UndefinedIdentifier` if the variable is not bound.
    /// - `TypeMismatch` if it does not hold a number.
    /// - `Overflow` if an integer leaves the `i64` range.
    pub(in crate::interpreter::evaluator) fn eval_update(&mut self,
                                                         op: UpdateOperator,
                                                         target: &str,
                                                         is_prefix: bool,
                                                         scope: ScopeId,
                                                         line: usize)
                                                         -> EvalResult<Value> {
        let old = self.eval_symbol(target, scope, line)?;

        let new = match (&old, op) {
            (Value::Integer(n), UpdateOperator::Increment) => {
                Value::Integer(n.checked_add(1).ok_or(RuntimeError::Overflow { line })?)
            },
            (Value::Integer(n), UpdateOperator::Decrement) => {
                Value::Integer(n.checked_sub(1).ok_or(RuntimeError::Overflow { line })?)
            },
            (Value::Float(r), UpdateOperator::Increment) => Value::Float(r + 1.0),
            (Value::Float(r), UpdateOperator::Decrement) => Value::Float(r - 1.0),
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("cannot increment or \
                                                                          decrement a {}",
                                                                         old.type_name()),
                                                        line });
            },
        };

        self.env.assign(scope, target, new.clone());
        Ok(if is_prefix { new } else { old })
    }
}
