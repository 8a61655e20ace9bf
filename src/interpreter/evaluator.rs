/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators: identity, arithmetic negation and logical
/// NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, statement
/// evaluation and scope handling for blocks.
pub mod core;

/// Assignment and update evaluation.
///
/// Implements `=`, the compound assignment operators and `++` / `--`.
pub mod assignment;

/// Utility functions for evaluation.
///
/// Provides tolerance-based float comparison, variable lookup and shared
/// error construction.
pub mod utils;

/// Function evaluation.
///
/// Handles calls to user-defined functions: argument checking, call frames,
/// reference parameters and return value handling.
pub mod function;
