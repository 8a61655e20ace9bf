use crate::{
    ast::{AssignOperator, BinaryOperator, UnaryOperator, UpdateOperator},
    interpreter::lexer::TokenKind,
};

/// Binding power of an operator, from weakest to strongest.
///
/// The derived ordering is the precedence order, so the climbing loop can
/// compare powers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Anything that does not continue an expression.
    Lowest,
    /// `=`, `+=`, `-=`, `*=`, `/=`
    Assignment,
    /// `||`
    LogicalOr,
    /// `&&`
    LogicalAnd,
    /// `==`, `!=`
    Equality,
    /// `<`, `>`, `<=`, `>=`
    Relational,
    /// `+`, `-`
    Additive,
    /// `<<`, `>>`, `%`
    Shift,
    /// `*`, `/`
    Multiplicative,
    /// Prefix `+`, `-`, `!`
    Unary,
    /// Calls and postfix `++` / `--`
    Call,
}

impl Precedence {
    /// The binding power a token has when it appears after an expression.
    ///
    /// # Example
    /// ```
    /// use minic::interpreter::{lexer::TokenKind, parser::precedence::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Star) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match infix_rule(kind) {
            Some((power, _)) => power,
            None => Self::Lowest,
        }
    }
}

/// Handler used when a token starts an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// Integer, float, string and boolean literals.
    Literal,
    /// A variable or function name.
    Identifier,
    /// `+x`, `-x`, `!x`
    Unary(UnaryOperator),
    /// `( expr )`
    Group,
    /// `++x`, `--x`
    Update(UpdateOperator),
}

/// Handler used when a token continues an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infix {
    /// A binary operator.
    Binary(BinaryOperator),
    /// An assignment operator.
    Assign(AssignOperator),
    /// `callee( args )`
    Call,
    /// `x++`, `x--`
    Postfix(UpdateOperator),
}

/// Prefix table: which handler, if any, a token dispatches to at the start of
/// an expression.
#[must_use]
pub const fn prefix_rule(kind: TokenKind) -> Option<Prefix> {
    use TokenKind as T;

    Some(match kind {
             T::Integer | T::Float | T::String | T::True | T::False => Prefix::Literal,
             T::Identifier => Prefix::Identifier,
             T::Plus => Prefix::Unary(UnaryOperator::Plus),
             T::Minus => Prefix::Unary(UnaryOperator::Negate),
             T::Bang => Prefix::Unary(UnaryOperator::Not),
             T::LParen => Prefix::Group,
             T::PlusPlus => Prefix::Update(UpdateOperator::Increment),
             T::MinusMinus => Prefix::Update(UpdateOperator::Decrement),
             _ => return None,
         })
}

/// Infix table: the binding power and handler of a token that follows an
/// expression.
#[must_use]
pub const fn infix_rule(kind: TokenKind) -> Option<(Precedence, Infix)> {
    use BinaryOperator as B;
    use Precedence as P;
    use TokenKind as T;

    Some(match kind {
             T::Equals => (P::Assignment, Infix::Assign(AssignOperator::Assign)),
             T::PlusAssign => (P::Assignment, Infix::Assign(AssignOperator::AddAssign)),
             T::MinusAssign => (P::Assignment, Infix::Assign(AssignOperator::SubAssign)),
             T::StarAssign => (P::Assignment, Infix::Assign(AssignOperator::MulAssign)),
             T::SlashAssign => (P::Assignment, Infix::Assign(AssignOperator::DivAssign)),
             T::OrOr => (P::LogicalOr, Infix::Binary(B::Or)),
             T::AndAnd => (P::LogicalAnd, Infix::Binary(B::And)),
             T::EqualEqual => (P::Equality, Infix::Binary(B::Equal)),
             T::BangEqual => (P::Equality, Infix::Binary(B::NotEqual)),
             T::Less => (P::Relational, Infix::Binary(B::Less)),
             T::Greater => (P::Relational, Infix::Binary(B::Greater)),
             T::LessEqual => (P::Relational, Infix::Binary(B::LessEqual)),
             T::GreaterEqual => (P::Relational, Infix::Binary(B::GreaterEqual)),
             T::Plus => (P::Additive, Infix::Binary(B::Add)),
             T::Minus => (P::Additive, Infix::Binary(B::Sub)),
             T::Percent => (P::Shift, Infix::Binary(B::Mod)),
             T::ShiftLeft => (P::Shift, Infix::Binary(B::ShiftLeft)),
             T::ShiftRight => (P::Shift, Infix::Binary(B::ShiftRight)),
             T::Star => (P::Multiplicative, Infix::Binary(B::Mul)),
             T::Slash => (P::Multiplicative, Infix::Binary(B::Div)),
             T::LParen => (P::Call, Infix::Call),
             T::PlusPlus => (P::Call, Infix::Postfix(UpdateOperator::Increment)),
             T::MinusMinus => (P::Call, Infix::Postfix(UpdateOperator::Decrement)),
             _ => return None,
         })
}
