#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use or assign an undefined variable.
    UndefinedIdentifier {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A `void` function returned a value.
    VoidReturnViolation {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer could not be promoted to a float without losing precision.
    PrecisionLoss {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Function calls nested deeper than the configured limit.
    RecursionLimit {
        /// The call that would have exceeded the limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedIdentifier { name, line } => {
                write!(f, "Error on line {line}: Undefined identifier: '{name}'.")
            },

            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type mismatch: {details}.")
            },

            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => {
                write!(f,
                       "Error on line {line}: Function '{name}' expects {expected} argument(s) \
                        but got {found}.")
            },

            Self::VoidReturnViolation { name, line } => {
                write!(f, "Error on line {line}: Function '{name}' is void but returned a value.")
            },

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::Overflow { line } => write!(f, "Error on line {line}: Arithmetic overflow."),

            Self::PrecisionLoss { line } => {
                write!(f,
                       "Error on line {line}: Integer too large to be converted to a float \
                        exactly.")
            },

            Self::RecursionLimit { limit, line } => {
                write!(f, "Error on line {line}: Calls nested deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
