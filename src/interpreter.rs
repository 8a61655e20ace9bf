/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, closures and control flow.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The environment module stores bindings in nested lexical scopes.
///
/// Scopes live in an arena and refer to their parent by index. The parser
/// uses the same arena to check that identifiers are declared, and the
/// evaluator uses it for every variable and function binding.
///
/// # Responsibilities
/// - Resolves names by walking outward from the innermost scope.
/// - Creates child scopes for blocks and call frames.
/// - Releases scopes that no function value closes over.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads one line of source text at a time and produces
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   source line.
/// - Handles numeric and string literals, identifiers, keywords and operators.
/// - Marks unrecognized input so the parser can report it.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a precedence-climbing (Pratt) parser. It pulls tokens from a
/// token stream on demand and constructs AST nodes for expressions and
/// statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and identifier declarations, reporting errors with
///   location info.
/// - Supports arithmetic, logic, assignments, declarations and function calls.
pub mod parser;
/// The session module runs statements one at a time.
///
/// Glues parser and evaluator together for interactive use: each statement is
/// parsed, evaluated and reported before the next one is read.
///
/// # Responsibilities
/// - Parses statements in a scratch scope and evaluates them globally.
/// - Recovers from parse errors by skipping the rest of the line.
/// - Rolls back the environment when evaluation fails.
pub mod session;
/// The token stream module feeds the parser with tokens on demand.
///
/// Lines are requested from a line source only when the parser needs a token
/// that has not been read yet, which keeps interactive input responsive.
///
/// # Responsibilities
/// - Defines the `LineSource` trait.
/// - Buffers the tokens of the lines read so far.
/// - Signals the end of input with a synthetic token.
pub mod token_stream;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation and
/// execution: integers, floats, strings, booleans, functions and the
/// control-flow wrapper used by `return`. It also provides methods for type
/// conversion and rendering.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements conversion and error checking helpers.
/// - Provides safe promotion from integers to floats.
pub mod value;
