/// The parser itself.
///
/// Holds the `Parser` type with its token stream and error list, the
/// statement entry point and the precedence-climbing expression loop.
pub mod core;

/// Binding powers and the prefix and infix dispatch tables.
///
/// Maps every token kind to the handler that parses it at the start of an
/// expression and, if it can continue one, to its binding power and infix
/// handler.
pub mod precedence;

/// Prefix handlers: literals, names, prefix operators, grouping and prefix
/// `++` / `--`.
pub mod prefix;

/// Infix handlers: binary operators, assignments, calls and postfix
/// `++` / `--`.
pub mod infix;

/// Statement parsing.
///
/// Declarations, function declarations, `return`, `if` and expression
/// statements.
pub mod statement;

/// Block parsing and the brace-delimited statement lists shared with
/// function bodies.
pub mod block;

/// Utility functions for the parser.
///
/// Provides list parsing, identifier and type keyword parsing, and string
/// literal unescaping.
pub mod utils;
