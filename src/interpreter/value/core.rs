use std::rc::Rc;

use crate::{
    ast::{FunctionDef, TypeHint},
    error::RuntimeError,
    interpreter::{environment::ScopeId, evaluator::core::EvalResult},
    util::num::i64_to_f64_checked,
};

/// A function value: a shared definition paired with the scope it closes
/// over.
///
/// Calls run in a fresh child of `closure`, so every invocation gets its own
/// frame while still seeing the bindings that were visible where the function
/// was declared.
#[derive(Debug, Clone)]
pub struct Function {
    /// The declaration this function was created from.
    pub def:     Rc<FunctionDef>,
    /// Scope the function was declared in.
    pub closure: ScopeId,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.def, &other.def) && self.closure == other.closure
    }
}

/// Represents a runtime value in the interpreter.
///
/// Values are never mutated in place; updating a variable replaces its slot
/// in the environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A string of text.
    String(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and required by `if`
    /// conditions.
    Boolean(bool),
    /// The absence of a value: the result of `return;`, an empty block or a
    /// call to a `void` function.
    Null,
    /// A user-defined function together with its closure scope.
    Function(Rc<Function>),
    /// A value travelling out of a function body through `return`. Unwrapped
    /// at call boundaries and at the top level.
    Return(Box<Self>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl Value {
    /// Returns the value a freshly declared variable of the given type holds.
    ///
    /// `void` has no default value.
    ///
    /// # Example
    /// ```
    /// use minic::{ast::TypeHint, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::default_for(TypeHint::Int), Some(Value::Integer(0)));
    /// assert_eq!(Value::default_for(TypeHint::String), Some(Value::String(String::new())));
    /// assert_eq!(Value::default_for(TypeHint::Void), None);
    /// ```
    #[must_use]
    pub const fn default_for(type_hint: TypeHint) -> Option<Self> {
        match type_hint {
            TypeHint::Int => Some(Self::Integer(0)),
            TypeHint::Float => Some(Self::Float(0.0)),
            TypeHint::String => Some(Self::String(String::new())),
            TypeHint::Bool => Some(Self::Boolean(false)),
            TypeHint::Void => None,
        }
    }

    /// Name of the value's runtime type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Boolean(_) => "bool",
            Self::Null => "null",
            Self::Function(_) => "function",
            Self::Return(_) => "return value",
        }
    }

    /// Converts the value to `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Float` and `Value::Integer`. Fails if the integer is
    /// too large to be represented exactly as `f64`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: The converted value.
    /// - `Err(RuntimeError)`: If not numeric or out of range.
    ///
    /// # Example
    /// ```
    /// use minic::interpreter::value::core::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_float(42).unwrap(), 10.0);
    /// assert!(Value::from("ten").as_float(42).is_err());
    /// ```
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::PrecisionLoss { line }),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a number, found {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for `if` conditions and logical operations.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a bool, found {}",
                                                                   self.type_name()),
                                                  line }),
        }
    }

    /// Strips a `Return` wrapper, leaving any other value untouched.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::Return(inner) => *inner,
            other => other,
        }
    }

    /// Returns `true` for the `Return` control wrapper.
    #[must_use]
    pub const fn is_return(&self) -> bool {
        matches!(self, Self::Return(_))
    }

    /// Renders the value as source text that evaluates back to an equal
    /// value.
    ///
    /// Unlike [`Display`](std::fmt::Display), floats keep their full
    /// precision and strings are quoted and escaped. Functions and `Null` have
    /// no literal form and fall back to their display text.
    ///
    /// # Example
    /// ```
    /// use minic::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Float(2.25).inspect(), "2.25");
    /// assert_eq!(Value::from("a\"b").inspect(), r#""a\"b""#);
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::Float(v) => format!("{v:?}"),
            Self::String(s) => {
                let mut out = String::with_capacity(s.len() + 2);
                out.push('"');
                for c in s.chars() {
                    match c {
                        '"' => out.push_str("\\\""),
                        '\\' => out.push_str("\\\\"),
                        '\n' => out.push_str("\\n"),
                        '\t' => out.push_str("\\t"),
                        _ => out.push(c),
                    }
                }
                out.push('"');
                out
            },
            Self::Return(inner) => inner.inspect(),
            _ => self.to_string(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r:.3}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => Ok(()),
            Self::Function(func) => write!(f, "<fn {}>", func.def.name),
            Self::Return(inner) => write!(f, "{inner}"),
        }
    }
}
