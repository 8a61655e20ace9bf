//! # minic
//!
//! minic is an interactive interpreter for a small, dynamically typed,
//! C-like language written in Rust. It parses statements with a
//! precedence-climbing parser and evaluates them with a tree-walking
//! evaluator over lexically scoped environments, with support for typed
//! declarations, blocks, conditionals, and functions with closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::value::core::Value;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Shares function definitions between the tree and function values.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, scoping, and the statement-by-statement session to
/// provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator,
///   and value types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are used
/// by the evaluator, such as lossless conversion from `i64` to `f64`.
pub mod util;

pub use interpreter::session::Session;

/// Runs a whole script and returns the value of its last statement.
///
/// This function parses and executes all statements in the provided source
/// string in a fresh session. Execution stops at the first statement that
/// fails.
///
/// # Errors
/// Returns an error if parsing or evaluation of any statement fails.
///
/// # Examples
/// ```
/// use minic::{get_result, interpreter::value::core::Value};
///
/// let source = "int x; x = 2 + 2; x * 10;";
/// assert_eq!(get_result(source).unwrap(), Value::Integer(40));
///
/// // Example with an intentional error (unknown variable).
/// let source = "int y; y = x + 1;"; // 'x' is not defined
/// assert!(get_result(source).is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut session = Session::new(source.lines().map(String::from));
    let mut result = Value::Null;

    for outcome in &mut session {
        result = outcome?;
    }

    Ok(result)
}
