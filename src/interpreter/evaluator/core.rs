use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeId},
        value::core::{Function, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default tolerance used when comparing floats.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Default limit on nested function calls.
///
/// Every call level uses native stack, so the limit has to stay well below
/// what the thread running the evaluator can hold.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope arena with every
/// binding, the tolerance applied to float comparisons and the call depth
/// limit.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating statements. Each
/// evaluation method takes the scope it runs in; top-level statements run in
/// [`Environment::global`].
pub struct Context {
    /// All scopes and their bindings.
    pub env:       Environment,
    /// Two floats closer than this compare equal.
    pub epsilon:   f64,
    /// Calls nested deeper than this fail with `RecursionLimit`.
    pub max_depth: usize,
    pub(crate) depth:         usize,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty global scope and the
    /// default float tolerance.
    #[must_use]
    pub fn new() -> Self {
        Self::with_epsilon(DEFAULT_EPSILON)
    }

    /// Creates a new evaluation context with a custom float tolerance.
    #[must_use]
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { env: Environment::new(),
               epsilon,
               max_depth: DEFAULT_MAX_CALL_DEPTH,
               depth: 0 }
    }

    /// Replaces the limit on nested function calls.
    ///
    /// # Example
    /// ```
    /// use minic::{Session, error::{Error, RuntimeError}, interpreter::evaluator::core::Context};
    ///
    /// let script = "int down(int n) { if (n == 0) return 0; return down(n - 1); } down(20);";
    /// let context = Context::new().with_max_depth(10);
    /// let mut session = Session::with_context(script.lines().map(String::from), context);
    ///
    /// assert!(session.next_outcome().unwrap().is_ok());
    /// assert!(matches!(session.next_outcome().unwrap(),
    ///                  Err(Error::Runtime(RuntimeError::RecursionLimit { limit: 10, .. }))));
    /// ```
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals, symbols, unary and
    /// binary operations, updates, assignments and calls.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: Scope names are resolved in.
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::new();
    /// let global = ctx.env.global();
    /// let expr = Expr::Binary { op:    BinaryOperator::Add,
    ///                           left:  Box::new(Expr::IntLiteral { value: 1, line: 1 }),
    ///                           right: Box::new(Expr::FloatLiteral { value: 2.5, line: 1 }),
    ///                           line:  1, };
    ///
    /// assert_eq!(ctx.eval(&expr, global).unwrap(), Value::Float(3.5));
    /// ```
    pub fn eval(&mut self, expr: &Expr, scope: ScopeId) -> EvalResult<Value> {
        match expr {
            Expr::IntLiteral { value, .. } => Ok(Value::Integer(*value)),
            Expr::FloatLiteral { value, .. } => Ok(Value::Float(*value)),
            Expr::StringLiteral { value, .. } => Ok(Value::String(value.clone())),
            Expr::BoolLiteral { value, .. } => Ok(Value::Boolean(*value)),
            Expr::Symbol { name, line } => self.eval_symbol(name, scope, *line),
            Expr::Unary { op, operand, line } => {
                let value = self.eval(operand, scope)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::Update { op,
                           target,
                           is_prefix,
                           line, } => self.eval_update(*op, target, *is_prefix, scope, *line),
            Expr::Binary { op,
                           left,
                           right,
                           line, } => self.eval_binary_expr(*op, left, right, scope, *line),
            Expr::Assignment { op,
                               target,
                               value,
                               line, } => self.eval_assignment(*op, target, value, scope, *line),
            Expr::Call { callee, args, line } => self.eval_call(callee, args, scope, *line),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Handles declarations, function declarations, blocks, `return`, `if`
    /// and expression statements. A declaration yields the default value it
    /// bound. A `return` produces a `Value::Return` that
    /// travels outward until a call boundary or the top level unwraps it.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    /// - `scope`: Scope the statement runs in.
    ///
    /// # Returns
    /// The statement's value; `Value::Null` for statements that yield none.
    pub fn eval_statement(&mut self, statement: &Statement, scope: ScopeId) -> EvalResult<Value> {
        match statement {
            Statement::Declaration { type_hint,
                                     names,
                                     line, } => {
                let value = Value::default_for(*type_hint).ok_or_else(|| {
                    RuntimeError::TypeMismatch { details: format!("cannot declare a variable of \
                                                                   type {type_hint}"),
                                                 line:    *line, }
                })?;
                for name in names {
                    self.env.define(scope, name, value.clone());
                }
                Ok(value)
            },
            Statement::Function(def) => {
                let function = Value::Function(Rc::new(Function { def:     Rc::clone(def),
                                                                  closure: scope, }));
                self.env.capture(scope);
                self.env.define(scope, &def.name, function.clone());
                Ok(function)
            },
            Statement::Block { statements, .. } => {
                let mark = self.env.mark();
                let inner = self.env.new_child(scope);
                let result = self.eval_statements(statements, inner);
                self.env.release(mark);
                result
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr, scope)?,
                    None => Value::Null,
                };
                Ok(Value::Return(Box::new(value)))
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            line, } => {
                if self.eval(condition, scope)?.as_bool(*line)? {
                    self.eval_statement(then_branch, scope)
                } else if let Some(else_branch) = else_branch {
                    self.eval_statement(else_branch, scope)
                } else {
                    Ok(Value::Null)
                }
            },
            Statement::Expression { expr, .. } => self.eval(expr, scope),
            Statement::Empty { .. } => Ok(Value::Null),
        }
    }

    /// Evaluates statements in order within one scope.
    ///
    /// Stops at the first statement that produces a `Value::Return` and
    /// passes it on unchanged. Otherwise the value of the last statement is
    /// returned, or `Value::Null` for an empty list.
    pub fn eval_statements(&mut self,
                           statements: &[Statement],
                           scope: ScopeId)
                           -> EvalResult<Value> {
        let mut last = Value::Null;
        for statement in statements {
            last = self.eval_statement(statement, scope)?;
            if last.is_return() {
                break;
            }
        }
        Ok(last)
    }
}
