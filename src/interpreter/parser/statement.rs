use std::rc::Rc;

use crate::{
    ast::{FunctionDef, Parameter, Statement, TypeHint},
    error::ParseError,
    interpreter::{
        environment::{Environment, ScopeId},
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
        token_stream::LineSource,
        value::core::{Function, Value},
    },
};

impl<S: LineSource> Parser<S> {
    /// Parses a single statement.
    ///
    /// Statements are:
    /// - typed declarations and function declarations,
    /// - `return`,
    /// - blocks,
    /// - `if` / `else`,
    /// - the empty statement `;`,
    /// - expressions terminated by `;`.
    pub(super) fn statement(&mut self,
                            env: &mut Environment,
                            scope: ScopeId)
                            -> ParseResult<Statement> {
        match self.tokens.peek_kind() {
            kind if kind.is_type_keyword() => self.parse_typed(env, scope),
            TokenKind::Return => self.parse_return(env, scope),
            TokenKind::LBrace => self.parse_block(env, scope),
            TokenKind::If => self.parse_if(env, scope),
            TokenKind::Semicolon => {
                let token = self.tokens.advance();
                Ok(Statement::Empty { line: token.line })
            },
            _ => {
                let line = self.tokens.current().line;
                let expr = self.parse_expression(env, scope, Precedence::Lowest)?;
                self.expect(TokenKind::Semicolon, ";")?;
                Ok(Statement::Expression { expr, line })
            },
        }
    }

    /// Parses what follows a type keyword: a variable declaration list or a
    /// function declaration.
    fn parse_typed(&mut self, env: &mut Environment, scope: ScopeId) -> ParseResult<Statement> {
        let line = self.tokens.current().line;
        let type_hint = self.parse_type()?;
        let name = self.parse_identifier()?;

        if self.tokens.peek_kind() == TokenKind::LParen {
            return self.parse_function(type_hint, name, line, env, scope);
        }

        let Some(placeholder) = Value::default_for(type_hint) else {
            return Err(ParseError::InvalidType { type_name: type_hint.to_string(),
                                                 line });
        };

        let mut names = vec![name];
        while self.tokens.peek_kind() == TokenKind::Comma {
            self.tokens.advance();
            names.push(self.parse_identifier()?);
        }
        self.expect(TokenKind::Semicolon, ";")?;

        for name in &names {
            env.define(scope, name, placeholder.clone());
        }

        Ok(Statement::Declaration { type_hint,
                                    names,
                                    line })
    }

    /// Parses `type name ( params ) { body }` after the name.
    ///
    /// Parameters and the body live in a child of the declaring scope.
    /// That scope first receives a placeholder for the function itself and
    /// then one for every parameter, so the body may call itself recursively
    /// unless a parameter of the same name hides the function, as it does
    /// when the call runs. Once the body is complete the
    /// function is bound in the declaring scope, making it callable from the
    /// statements that follow.
    ///
    /// # Errors
    /// - `InvalidType` for a `void` parameter.
    /// - `UnterminatedStatement` if the parameter list or body is not closed.
    /// - Propagates errors from the body's statements.
    fn parse_function(&mut self,
                      return_type: TypeHint,
                      name: String,
                      line: usize,
                      env: &mut Environment,
                      scope: ScopeId)
                      -> ParseResult<Statement> {
        self.expect(TokenKind::LParen, "(")?;
        let fn_scope = env.new_child(scope);

        // Parameters are bound after this and replace it on a name clash.
        let signature = Rc::new(FunctionDef { return_type,
                                              name: name.clone(),
                                              params: Vec::new(),
                                              body: Vec::new(),
                                              line });
        env.define(fn_scope,
                   &name,
                   Value::Function(Rc::new(Function { def:     signature,
                                                      closure: scope, })));

        let params = self.parse_comma_separated(|parser| parser.parse_parameter(env, fn_scope),
                                                TokenKind::RParen,
                                                ")")?;

        self.expect(TokenKind::LBrace, "{")?;
        let body = self.parse_statements_until_brace(env, fn_scope)?;

        let def = Rc::new(FunctionDef { return_type,
                                        name,
                                        params,
                                        body,
                                        line });
        env.define(scope,
                   &def.name,
                   Value::Function(Rc::new(Function { def:     Rc::clone(&def),
                                                      closure: scope, })));

        Ok(Statement::Function(def))
    }

    /// Parses `type name` or `type & name` inside a parameter list and binds
    /// the parameter's placeholder in the function's scope.
    fn parse_parameter(&mut self,
                       env: &mut Environment,
                       fn_scope: ScopeId)
                       -> ParseResult<Parameter> {
        let line = self.tokens.current().line;
        let type_hint = self.parse_type()?;
        let Some(placeholder) = Value::default_for(type_hint) else {
            return Err(ParseError::InvalidType { type_name: type_hint.to_string(),
                                                 line });
        };

        let by_reference = self.tokens.peek_kind() == TokenKind::Ampersand;
        if by_reference {
            self.tokens.advance();
        }
        let name = self.parse_identifier()?;
        env.define(fn_scope, &name, placeholder);

        Ok(Parameter { type_hint,
                       name,
                       by_reference })
    }

    /// Parses `return;` or `return expr;`.
    fn parse_return(&mut self, env: &mut Environment, scope: ScopeId) -> ParseResult<Statement> {
        let line = self.tokens.advance().line;

        if self.tokens.peek_kind() == TokenKind::Semicolon {
            self.tokens.advance();
            return Ok(Statement::Return { value: None,
                                          line });
        }

        let value = self.parse_expression(env, scope, Precedence::Lowest)?;
        self.expect(TokenKind::Semicolon, ";")?;
        Ok(Statement::Return { value: Some(value),
                               line })
    }

    /// Parses `if ( condition ) statement` with an optional `else` branch.
    ///
    /// Chained `else if` needs no special case: the `else` branch is simply
    /// another `if` statement.
    fn parse_if(&mut self, env: &mut Environment, scope: ScopeId) -> ParseResult<Statement> {
        let line = self.tokens.advance().line;

        self.expect(TokenKind::LParen, "(")?;
        let condition = self.parse_expression(env, scope, Precedence::Lowest)?;
        self.expect(TokenKind::RParen, ")")?;

        let then_branch = Box::new(self.statement(env, scope)?);
        let else_branch = if self.tokens.peek_kind() == TokenKind::Else {
            self.tokens.advance();
            Some(Box::new(self.statement(env, scope)?))
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_branch,
                           else_branch,
                           line })
    }
}
