use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef, TypeHint},
    error::RuntimeError,
    interpreter::{
        environment::ScopeId,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a call to a user-defined function.
    ///
    /// Steps:
    /// 1. Resolve the callee and check the argument count.
    /// 2. Evaluate the arguments left to right in the caller's scope.
    /// 3. Bind them in a fresh child of the function's closure scope, so
    ///    recursive calls never share a frame and parameters never leak into
    ///    the caller.
    /// 4. Run the body, then copy the final values of `&` parameters back to
    ///    the caller's variables.
    ///
    /// # Parameters
    /// - `callee`: Name of the called function.
    /// - `args`: Argument expressions.
    /// - `scope`: Scope of the caller.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `UndefinedIdentifier` if `callee` is not bound.
    /// - `TypeMismatch` if it is not a function, or if a reference parameter
    ///   receives something other than a variable.
    /// - `ArityMismatch` if the argument count is wrong.
    /// - `RecursionLimit` if the call would nest deeper than `max_depth`.
    /// - `VoidReturnViolation` if a `void` function returns a value.
    /// - Any error raised by the arguments or the body.
    pub(in crate::interpreter::evaluator) fn eval_call(&mut self,
                                                       callee: &str,
                                                       args: &[Expr],
                                                       scope: ScopeId,
                                                       line: usize)
                                                       -> EvalResult<Value> {
        let function = match self.eval_symbol(callee, scope, line)? {
            Value::Function(function) => function,
            other => {
                return Err(RuntimeError::TypeMismatch { details: format!("'{callee}' is a {}, \
                                                                          not a function",
                                                                         other.type_name()),
                                                        line });
            },
        };
        let def = Rc::clone(&function.def);

        if args.len() != def.params.len() {
            return Err(RuntimeError::ArityMismatch { name: def.name.clone(),
                                                     expected: def.params.len(),
                                                     found: args.len(),
                                                     line });
        }

        let mut values = Vec::with_capacity(args.len());
        for (param, arg) in def.params.iter().zip(args) {
            if param.by_reference && !matches!(arg, Expr::Symbol { .. }) {
                return Err(RuntimeError::TypeMismatch { details: format!("reference parameter \
                                                                          '{}' needs a variable",
                                                                         param.name),
                                                        line });
            }
            values.push(self.eval(arg, scope)?);
        }

        if self.depth >= self.max_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.max_depth,
                                                      line });
        }
        self.depth += 1;

        let mark = self.env.mark();
        let frame = self.env.new_child(function.closure);
        for (param, value) in def.params.iter().zip(values) {
            self.env.define(frame, &param.name, value);
        }

        let result = match self.eval_statements(&def.body, frame) {
            Ok(value) => {
                self.copy_out(&def, args, frame, scope);
                Self::finish_call(&def, value, line)
            },
            Err(e) => Err(e),
        };
        self.env.release(mark);
        self.depth -= 1;
        result
    }

    /// Writes the final values of `&` parameters back to the variables the
    /// caller passed for them.
    fn copy_out(&mut self, def: &FunctionDef, args: &[Expr], frame: ScopeId, caller: ScopeId) {
        for (param, arg) in def.params.iter().zip(args) {
            if param.by_reference
               && let Expr::Symbol { name, .. } = arg
               && let Some(value) = self.env.get(frame, &param.name).cloned()
            {
                self.env.assign(caller, name, value);
            }
        }
    }

    /// Turns the value a body produced into the value of the call.
    ///
    /// A `return` wrapper is removed. `void` functions always yield
    /// `Value::Null` and may only use `return;`.
    fn finish_call(def: &FunctionDef, value: Value, line: usize) -> EvalResult<Value> {
        match (def.return_type, value) {
            (TypeHint::Void, Value::Return(inner)) if !matches!(*inner, Value::Null) => {
                Err(RuntimeError::VoidReturnViolation { name: def.name.clone(),
                                                        line })
            },
            (TypeHint::Void, _) => Ok(Value::Null),
            (_, value) => Ok(value.unwrap_return()),
        }
    }
}
