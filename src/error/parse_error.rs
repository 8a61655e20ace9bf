#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a token that cannot appear at this position, or text the lexer
    /// could not recognize.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token cannot start an expression.
    NoPrefixHandler {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token can start an expression but cannot continue one, as in
    /// `1 2`.
    NoInfixHandler {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A required terminator or closing token was missing.
    UnterminatedStatement {
        /// The token that was required.
        expected: &'static str,
        /// The token found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An identifier was used before being declared in any enclosing scope.
    UndefinedIdentifier {
        /// The identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Something other than a known function was called.
    NotCallable {
        /// Description of the callee.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of an assignment or update is not a variable.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A type cannot be used at this position, such as a `void` variable.
    InvalidType {
        /// The offending type name.
        type_name: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A literal value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixHandler { line, .. }
            | Self::NoInfixHandler { line, .. }
            | Self::UnterminatedStatement { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::UndefinedIdentifier { line, .. }
            | Self::NotCallable { line, .. }
            | Self::InvalidAssignmentTarget { line }
            | Self::InvalidType { line, .. }
            | Self::LiteralTooLarge { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: '{token}'.")
            },

            Self::NoPrefixHandler { token, line } => {
                write!(f, "Error on line {line}: '{token}' cannot start an expression.")
            },

            Self::NoInfixHandler { token, line } => {
                write!(f, "Error on line {line}: '{token}' cannot follow an expression.")
            },

            Self::UnterminatedStatement { expected,
                                          found,
                                          line, } => {
                write!(f, "Error on line {line}: Expected '{expected}' but found '{found}'.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::UndefinedIdentifier { name, line } => {
                write!(f, "Error on line {line}: Undefined identifier: '{name}'.")
            },

            Self::NotCallable { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },

            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Only variables can be assigned or updated.")
            },

            Self::InvalidType { type_name, line } => {
                write!(f, "Error on line {line}: Type '{type_name}' cannot be used here.")
            },

            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal too large to be represented safely.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
