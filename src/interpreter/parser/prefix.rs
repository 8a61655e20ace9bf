use crate::{
    ast::{Expr, UnaryOperator, UpdateOperator},
    error::ParseError,
    interpreter::{
        environment::{Environment, ScopeId},
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, Parser},
            precedence::{Precedence, Prefix},
            utils::unescape,
        },
        token_stream::LineSource,
    },
};

impl<S: LineSource> Parser<S> {
    /// Dispatches a token that starts an expression to its prefix handler.
    ///
    /// # Parameters
    /// - `rule`: Handler selected from the prefix table.
    /// - `token`: The already consumed token.
    /// - `env`, `scope`: Where identifiers are resolved.
    pub(super) fn parse_prefix(&mut self,
                               rule: Prefix,
                               token: Token,
                               env: &mut Environment,
                               scope: ScopeId)
                               -> ParseResult<Expr> {
        match rule {
            Prefix::Literal => Self::parse_literal(token),
            Prefix::Identifier => Self::parse_symbol(token, env, scope),
            Prefix::Unary(op) => self.parse_unary(op, token.line, env, scope),
            Prefix::Group => {
                let inner = self.parse_expression(env, scope, Precedence::Lowest)?;
                self.expect(TokenKind::RParen, ")")?;
                Ok(inner)
            },
            Prefix::Update(op) => self.parse_prefix_update(op, token.line, env, scope),
        }
    }

    /// Builds a literal node from its token.
    ///
    /// # Errors
    /// - `LiteralTooLarge` if an integer literal does not fit in `i64`.
    /// - `UnexpectedToken` if a float literal cannot be read.
    fn parse_literal(token: Token) -> ParseResult<Expr> {
        let line = token.line;
        match token.kind {
            TokenKind::Integer => {
                let value = token.lexeme
                                 .parse()
                                 .map_err(|_| ParseError::LiteralTooLarge { line })?;
                Ok(Expr::IntLiteral { value, line })
            },
            TokenKind::Float => {
                let value = token.lexeme
                                 .parse()
                                 .map_err(|_| ParseError::UnexpectedToken { token:
                                                                                token.lexeme
                                                                                     .clone(),
                                                                            line })?;
                Ok(Expr::FloatLiteral { value, line })
            },
            TokenKind::String => {
                let inner = token.lexeme
                                 .get(1..token.lexeme.len().saturating_sub(1))
                                 .unwrap_or_default();
                Ok(Expr::StringLiteral { value: unescape(inner),
                                         line })
            },
            TokenKind::True => Ok(Expr::BoolLiteral { value: true,
                                                      line }),
            TokenKind::False => Ok(Expr::BoolLiteral { value: false,
                                                       line }),
            _ => Err(ParseError::UnexpectedToken { token: token.lexeme,
                                                   line }),
        }
    }

    /// Builds a symbol reference, checking that the name is declared in the
    /// scope chain.
    fn parse_symbol(token: Token, env: &Environment, scope: ScopeId) -> ParseResult<Expr> {
        if !env.var_exists(scope, &token.lexeme) {
            return Err(ParseError::UndefinedIdentifier { name: token.lexeme,
                                                         line: token.line, });
        }
        Ok(Expr::Symbol { name: token.lexeme,
                          line: token.line, })
    }

    /// Parses the operand of a prefix operator at unary binding power, so
    /// that `-a * b` negates only `a`.
    fn parse_unary(&mut self,
                   op: UnaryOperator,
                   line: usize,
                   env: &mut Environment,
                   scope: ScopeId)
                   -> ParseResult<Expr> {
        let operand = self.parse_expression(env, scope, Precedence::Unary)?;
        Ok(Expr::Unary { op,
                         operand: Box::new(operand),
                         line })
    }

    /// Parses `++name` or `--name`.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the operator is not followed by a name.
    /// - `UndefinedIdentifier` if the name is not declared.
    fn parse_prefix_update(&mut self,
                           op: UpdateOperator,
                           line: usize,
                           env: &Environment,
                           scope: ScopeId)
                           -> ParseResult<Expr> {
        let target = self.tokens.advance();
        if target.kind != TokenKind::Identifier {
            return Err(ParseError::InvalidAssignmentTarget { line });
        }
        let Expr::Symbol { name, .. } = Self::parse_symbol(target, env, scope)? else {
            return Err(ParseError::InvalidAssignmentTarget { line });
        };
        Ok(Expr::Update { op,
                          target: name,
                          is_prefix: true,
                          line })
    }
}
