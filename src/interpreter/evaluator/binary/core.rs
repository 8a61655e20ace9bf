use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::ScopeId,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary expression.
    ///
    /// `&&` and `||` are routed to `eval_short_circuit`, which may skip the
    /// right operand. For every other operator both operands are evaluated,
    /// left first, and combined with `eval_binary`.
    pub(in crate::interpreter::evaluator) fn eval_binary_expr(&mut self,
                                                              op: BinaryOperator,
                                                              left: &Expr,
                                                              right: &Expr,
                                                              scope: ScopeId,
                                                              line: usize)
                                                              -> EvalResult<Value> {
        if matches!(op, BinaryOperator::And | BinaryOperator::Or) {
            return self.eval_short_circuit(op, left, right, scope, line);
        }
        let left = self.eval(left, scope)?;
        let right = self.eval(right, scope)?;
        self.eval_binary(op, &left, &right, line)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Arithmetic operators use `eval_arithmetic`; modulo and
    /// shifts use `eval_integer_op`. Relational and equality operators use
    /// `eval_comparison`, which applies the context's float tolerance.
    /// Logical operators call `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let context = Context::new();
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = context.eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(&self,
                       op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            ShiftLeft, ShiftRight, Sub,
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_arithmetic(op, left, right, line),
            Mod | ShiftLeft | ShiftRight => Self::eval_integer_op(op, left, right, line),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                self.eval_comparison(op, left, right, line)
            },
            And | Or => Self::eval_logic(op, left, right, line),
        }
    }
}
