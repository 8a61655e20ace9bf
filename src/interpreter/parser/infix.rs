use crate::{
    ast::{AssignOperator, BinaryOperator, Expr, UpdateOperator},
    error::ParseError,
    interpreter::{
        environment::{Environment, ScopeId},
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, Parser},
            precedence::{Infix, Precedence},
        },
        token_stream::LineSource,
        value::core::Value,
    },
};

impl<S: LineSource> Parser<S> {
    /// Dispatches a token that continues an expression to its infix handler.
    ///
    /// # Parameters
    /// - `rule`: Handler selected from the infix table.
    /// - `left`: The expression parsed so far.
    /// - `token`: The already consumed operator token.
    /// - `env`, `scope`: Where identifiers are resolved.
    pub(super) fn parse_infix(&mut self,
                              rule: Infix,
                              left: Expr,
                              token: Token,
                              env: &mut Environment,
                              scope: ScopeId)
                              -> ParseResult<Expr> {
        match rule {
            Infix::Binary(op) => {
                let power = Precedence::of(token.kind);
                self.parse_binary(op, power, left, token.line, env, scope)
            },
            Infix::Assign(op) => self.parse_assignment(op, left, token.line, env, scope),
            Infix::Call => self.parse_call(left, token.line, env, scope),
            Infix::Postfix(op) => Self::parse_postfix_update(op, left, token.line),
        }
    }

    /// Parses the right operand at the operator's own binding power, which
    /// makes operators of equal precedence associate to the left.
    fn parse_binary(&mut self,
                    op: BinaryOperator,
                    power: Precedence,
                    left: Expr,
                    line: usize,
                    env: &mut Environment,
                    scope: ScopeId)
                    -> ParseResult<Expr> {
        let right = self.parse_expression(env, scope, power)?;
        Ok(Expr::Binary { op,
                          left: Box::new(left),
                          right: Box::new(right),
                          line })
    }

    /// Parses `name = value` and the compound forms.
    ///
    /// The right-hand side is parsed at the lowest power, so `a = b = 1`
    /// groups as `a = (b = 1)`.
    ///
    /// # Errors
    /// `InvalidAssignmentTarget` if the left side is not a plain name.
    fn parse_assignment(&mut self,
                        op: AssignOperator,
                        left: Expr,
                        line: usize,
                        env: &mut Environment,
                        scope: ScopeId)
                        -> ParseResult<Expr> {
        let Expr::Symbol { name, .. } = left else {
            return Err(ParseError::InvalidAssignmentTarget { line });
        };
        let value = self.parse_expression(env, scope, Precedence::Lowest)?;
        Ok(Expr::Assignment { op,
                              target: name,
                              value: Box::new(value),
                              line })
    }

    /// Parses the argument list of a call.
    ///
    /// # Errors
    /// `NotCallable` unless the callee is a name currently bound to a
    /// function.
    fn parse_call(&mut self,
                  left: Expr,
                  line: usize,
                  env: &mut Environment,
                  scope: ScopeId)
                  -> ParseResult<Expr> {
        let Expr::Symbol { name, .. } = left else {
            return Err(ParseError::NotCallable { name: "expression".to_string(),
                                                 line });
        };
        if !matches!(env.get(scope, &name), Some(Value::Function(_))) {
            return Err(ParseError::NotCallable { name, line });
        }

        let args = self.parse_comma_separated(|parser| {
                                                  parser.parse_expression(env,
                                                                          scope,
                                                                          Precedence::Lowest)
                                              },
                                              TokenKind::RParen,
                                              ")")?;
        Ok(Expr::Call { callee: name,
                        args,
                        line })
    }

    /// Builds `name++` or `name--`.
    fn parse_postfix_update(op: UpdateOperator, left: Expr, line: usize) -> ParseResult<Expr> {
        let Expr::Symbol { name, .. } = left else {
            return Err(ParseError::InvalidAssignmentTarget { line });
        };
        Ok(Expr::Update { op,
                          target: name,
                          is_prefix: false,
                          line })
    }
}
