use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::operand_mismatch,
        },
        value::core::Value,
    },
    util::num::shift_amount,
};

impl Context {
    /// Evaluates `+`, `-`, `*` or `/`.
    ///
    /// - `+` with a string on either side concatenates; the other operand is
    ///   rendered with its display form. Any other operator on a string is a
    ///   type mismatch.
    /// - If either operand is a float, both are promoted to floats.
    /// - Two integers use checked integer arithmetic; division truncates.
    ///
    /// Division by zero is reported for integers and floats alike.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
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
    /// let x = Value::Integer(5);
    /// let y = Value::Integer(2);
    /// assert_eq!(Context::eval_arithmetic(BinaryOperator::Div, &x, &y, 1).unwrap(),
    ///            Value::Integer(2));
    ///
    /// let s = Value::from("n=");
    /// assert_eq!(Context::eval_arithmetic(BinaryOperator::Add, &s, &x, 1).unwrap(),
    ///            Value::from("n=5"));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Float, Integer, String};

        match (left, right) {
            (String(_), _) | (_, String(_)) if op == Add => Ok(String(format!("{left}{right}"))),
            (Float(_), Integer(_) | Float(_)) | (Integer(_), Float(_)) => {
                let a = left.as_float(line)?;
                let b = right.as_float(line)?;

                Ok(Float(match op {
                             Add => a + b,
                             Sub => a - b,
                             Mul => a * b,
                             Div => {
                                 if b == 0.0 {
                                     return Err(RuntimeError::DivisionByZero { line });
                                 }
                                 a / b
                             },
                             _ => return Err(operand_mismatch(op, left, right, line)),
                         }))
            },
            (Integer(a), Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    Div => {
                        if *b == 0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        a.checked_div(*b)
                    },
                    _ => return Err(operand_mismatch(op, left, right, line)),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            _ => Err(operand_mismatch(op, left, right, line)),
        }
    }

    /// Evaluates `%`, `<<` or `>>`, which are defined for integers only.
    ///
    /// # Errors
    /// - `DivisionByZero` for `% 0`.
    /// - `Overflow` for a shift amount outside `0..64`.
    /// - `TypeMismatch` for non-integer operands.
    pub fn eval_integer_op(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(operand_mismatch(op, left, right, line));
        };

        let result = match op {
            BinaryOperator::Mod => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_rem(*b)
            },
            BinaryOperator::ShiftLeft => shift_amount(*b).and_then(|n| a.checked_shl(n)),
            BinaryOperator::ShiftRight => shift_amount(*b).and_then(|n| a.checked_shr(n)),
            _ => return Err(operand_mismatch(op, left, right, line)),
        };
        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }
}
