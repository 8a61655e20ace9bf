use log::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        environment::{Environment, ScopeId},
        lexer::{Token, TokenKind},
        parser::precedence::{Precedence, infix_rule, prefix_rule},
        token_stream::{LineSource, TokenStream},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Precedence-climbing parser over a lazily filled token stream.
///
/// Identifiers are validated while parsing: every name must be bound in the
/// environment chain starting at the scope passed in. Declarations parsed
/// along the way bind placeholders, so a caller that does not want parsing
/// to leave bindings behind should parse inside a throwaway scope and
/// truncate the environment afterwards.
///
/// The first error aborts the statement being parsed. It is appended to the
/// parser's error list, which keeps growing until [`reset`](Self::reset).
pub struct Parser<S> {
    pub(super) tokens: TokenStream<S>,
    errors:            Vec<ParseError>,
}

impl<S: LineSource> Parser<S> {
    /// Creates a parser reading from the given line source.
    pub fn new(source: S) -> Self {
        Self { tokens: TokenStream::new(source),
               errors: Vec::new() }
    }

    /// Errors recorded since the last reset, oldest first.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Recovers from a failed statement: drops the unread rest of the current
    /// line and clears the error list.
    pub fn reset(&mut self) {
        self.tokens.discard_pending();
        self.errors.clear();
    }

    /// Kind of the next token, pulling input if none is pending.
    pub fn peek_kind(&mut self) -> TokenKind {
        self.tokens.peek_kind()
    }

    /// Consumes the next token.
    pub fn skip_token(&mut self) {
        self.tokens.advance();
    }

    /// Parses one complete statement.
    ///
    /// # Parameters
    /// - `env`: Environment used to validate identifiers; receives
    ///   placeholder bindings for declarations.
    /// - `scope`: Scope the statement is parsed in.
    ///
    /// # Errors
    /// Returns the first `ParseError` met; it is also recorded in
    /// [`errors`](Self::errors).
    ///
    /// # Example
    /// ```
    /// use minic::{
    ///     ast::Statement,
    ///     interpreter::{environment::Environment, parser::core::Parser},
    /// };
    ///
    /// let mut env = Environment::new();
    /// let global = env.global();
    /// let mut parser = Parser::new(vec!["int x; x = 1 +".to_string(), "2;".to_string()].into_iter());
    ///
    /// let decl = parser.parse_statement(&mut env, global).unwrap();
    /// assert!(matches!(decl, Statement::Declaration { .. }));
    ///
    /// // The assignment continues on the second line.
    /// let assign = parser.parse_statement(&mut env, global).unwrap();
    /// assert!(matches!(assign, Statement::Expression { line: 1, .. }));
    ///
    /// assert!(parser.parse_statement(&mut env, global).is_err());
    /// assert_eq!(parser.errors().len(), 1);
    /// ```
    pub fn parse_statement(&mut self,
                           env: &mut Environment,
                           scope: ScopeId)
                           -> ParseResult<Statement> {
        let result = self.statement(env, scope);
        if let Err(e) = &result {
            debug!("parse error: {e}");
            self.errors.push(e.clone());
        }
        result
    }

    /// Parses an expression whose operators all bind tighter than `min`.
    ///
    /// The current token is dispatched through the prefix table; then, while
    /// the next token binds tighter than `min`, it is dispatched through the
    /// infix table with the expression built so far as its left operand.
    /// Equal powers stop the loop, so operators of one level associate to the
    /// left.
    ///
    /// A token that could start an expression but cannot continue one (as
    /// the second literal in `1 2`) is reported as `NoInfixHandler` instead of
    /// ending the expression silently.
    ///
    /// # Errors
    /// Returns a `ParseError` if a token has no handler, an identifier is not
    /// declared, or a handler fails.
    pub fn parse_expression(&mut self,
                            env: &mut Environment,
                            scope: ScopeId,
                            min: Precedence)
                            -> ParseResult<Expr> {
        let token = self.tokens.advance();
        let Some(rule) = prefix_rule(token.kind) else {
            return Err(Self::no_prefix(token));
        };
        let mut left = self.parse_prefix(rule, token, env, scope)?;

        loop {
            let kind = self.tokens.peek_kind();
            if kind == TokenKind::Semicolon {
                break;
            }
            match infix_rule(kind) {
                Some((power, rule)) if power > min => {
                    let token = self.tokens.advance();
                    left = self.parse_infix(rule, left, token, env, scope)?;
                },
                None if prefix_rule(kind).is_some() => {
                    let token = self.tokens.current();
                    return Err(ParseError::NoInfixHandler { token: token.lexeme.clone(),
                                                            line:  token.line, });
                },
                _ => break,
            }
        }

        Ok(left)
    }

    /// Consumes the next token, which must be of the given kind.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the input ran out.
    /// - `UnexpectedToken` if the lexer could not recognize the text.
    /// - `UnterminatedStatement` for any other token.
    pub(super) fn expect(&mut self,
                         kind: TokenKind,
                         expected: &'static str)
                         -> ParseResult<Token> {
        let token = self.tokens.advance();
        if token.kind == kind {
            return Ok(token);
        }
        Err(match token.kind {
                TokenKind::EndOfInput => ParseError::UnexpectedEndOfInput { line: token.line },
                TokenKind::Invalid => ParseError::UnexpectedToken { token: token.lexeme,
                                                                    line:  token.line, },
                _ => ParseError::UnterminatedStatement { expected,
                                                         found: token.lexeme,
                                                         line: token.line },
            })
    }

    /// Builds the error for a token that cannot start an expression.
    fn no_prefix(token: Token) -> ParseError {
        match token.kind {
            TokenKind::EndOfInput => ParseError::UnexpectedEndOfInput { line: token.line },
            TokenKind::Invalid => ParseError::UnexpectedToken { token: token.lexeme,
                                                                line:  token.line, },
            _ => ParseError::NoPrefixHandler { token: token.lexeme,
                                               line:  token.line, },
        }
    }
}
