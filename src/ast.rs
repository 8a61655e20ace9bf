use std::rc::Rc;

/// A declared type, as written in declarations and function signatures.
///
/// Types only decide the default value a fresh variable receives and whether
/// a function may return a value; the language itself stays dynamically
/// typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeHint {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `void`; only valid as a function return type.
    Void,
}

impl std::fmt::Display for TypeHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Void => "void",
        };
        write!(f, "{s}")
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+x`
    Plus,
    /// `-x`
    Negate,
    /// `!x`
    Not,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{s}")
    }
}

/// Infix operators producing a new value from two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
        };
        write!(f, "{s}")
    }
}

/// Assignment forms: plain `=` or one of the compound operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOperator {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
}

impl AssignOperator {
    /// The arithmetic operator a compound assignment applies, if any.
    #[must_use]
    pub const fn arithmetic(self) -> Option<BinaryOperator> {
        match self {
            Self::Assign => None,
            Self::AddAssign => Some(BinaryOperator::Add),
            Self::SubAssign => Some(BinaryOperator::Sub),
            Self::MulAssign => Some(BinaryOperator::Mul),
            Self::DivAssign => Some(BinaryOperator::Div),
        }
    }
}

/// `++` or `--`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateOperator {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the source line it started on, for error
/// reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal such as `42`.
    IntLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A floating-point literal such as `2.5`.
    FloatLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, already unescaped.
    StringLiteral {
        /// The literal value.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    BoolLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable or function by name.
    Symbol {
        /// Name of the identifier.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix operation such as `-x` or `!flag`.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// `++x`, `x++`, `--x` or `x--`.
    Update {
        /// Increment or decrement.
        op:        UpdateOperator,
        /// Name of the updated variable.
        target:    String,
        /// Whether the operator was written before the variable.
        is_prefix: bool,
        /// Line number in the source code.
        line:      usize,
    },
    /// A binary operation such as `a + b` or `a && b`.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `target = value` or a compound assignment such as `target += value`.
    Assignment {
        /// The assignment form.
        op:     AssignOperator,
        /// Name of the assigned variable.
        target: String,
        /// The assigned expression.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A function call such as `add(1, 2)`.
    Call {
        /// Name of the called function.
        callee: String,
        /// Argument expressions, in source order.
        args:   Vec<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Returns the source line of the expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IntLiteral { line, .. }
            | Self::FloatLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::BoolLiteral { line, .. }
            | Self::Symbol { line, .. }
            | Self::Unary { line, .. }
            | Self::Update { line, .. }
            | Self::Binary { line, .. }
            | Self::Assignment { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// A formal parameter of a function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Declared type; decides the placeholder used while parsing the body.
    pub type_hint:    TypeHint,
    /// Parameter name.
    pub name:         String,
    /// Whether the parameter was declared with `&`.
    pub by_reference: bool,
}

/// Represents a user-defined function.
///
/// The definition is shared through `Rc` between the AST and every function
/// value created from it, so evaluating a declaration never copies the body.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Declared return type.
    pub return_type: TypeHint,
    /// Function name.
    pub name:        String,
    /// Formal parameters.
    pub params:      Vec<Parameter>,
    /// Statements of the body.
    pub body:        Vec<Statement>,
    /// Line number where the function is declared.
    pub line:        usize,
}

/// An AST node for a statement.
///
/// Statements are the units the session parses and evaluates one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `int x, y;`: binds the type's default value under each name.
    Declaration {
        /// Declared type.
        type_hint: TypeHint,
        /// Declared names, in source order.
        names:     Vec<String>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A function declaration.
    Function(Rc<FunctionDef>),
    /// `{ ... }`
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `return;` or `return expr;`
    Return {
        /// The returned expression, if any.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if (condition) statement else statement`
    If {
        /// The condition; must evaluate to a boolean.
        condition:   Expr,
        /// Statement run when the condition holds.
        then_branch: Box<Self>,
        /// Statement run otherwise.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// An expression followed by `;`.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A lone `;`.
    Empty {
        /// Line number in the source code.
        line: usize,
    },
}
