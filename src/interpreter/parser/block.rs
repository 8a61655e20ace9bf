use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        environment::{Environment, ScopeId},
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        token_stream::LineSource,
    },
};

impl<S: LineSource> Parser<S> {
    /// Parses `{ statement* }`.
    ///
    /// The block gets its own parse-time scope, so declarations inside it are
    /// not visible after the closing brace.
    pub(super) fn parse_block(&mut self,
                              env: &mut Environment,
                              scope: ScopeId)
                              -> ParseResult<Statement> {
        let line = self.tokens.advance().line;
        let block_scope = env.new_child(scope);
        let statements = self.parse_statements_until_brace(env, block_scope)?;

        Ok(Statement::Block { statements, line })
    }

    /// Parses statements up to and including the closing `}`.
    ///
    /// # Errors
    /// `UnexpectedEndOfInput` if the input ends before the brace is closed.
    pub(super) fn parse_statements_until_brace(&mut self,
                                               env: &mut Environment,
                                               scope: ScopeId)
                                               -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();
        loop {
            match self.tokens.peek_kind() {
                TokenKind::RBrace => {
                    self.tokens.advance();
                    return Ok(statements);
                },
                TokenKind::EndOfInput => {
                    return Err(ParseError::UnexpectedEndOfInput { line: self.tokens.line() });
                },
                _ => statements.push(self.statement(env, scope)?),
            }
        }
    }
}
