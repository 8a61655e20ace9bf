use crate::{
    ast::TypeHint,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        token_stream::LineSource,
    },
};

impl<S: LineSource> Parser<S> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by argument lists and parameter lists. It
    /// repeatedly calls `parse_item` to parse one element, expecting either:
    ///
    /// - a comma, to continue the list, or
    /// - the specified closing token, to end it.
    ///
    /// An immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    /// - `closing`: The token that terminates the list.
    /// - `closing_text`: How the closing token is spelled, for errors.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an item fails to parse,
    /// - an unexpected token is encountered,
    /// - the stream ends before the closing token.
    pub(super) fn parse_comma_separated<T>(&mut self,
                                           mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
                                           closing: TokenKind,
                                           closing_text: &'static str)
                                           -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.tokens.peek_kind() == closing {
            self.tokens.advance();
            return Ok(items);
        }
        loop {
            items.push(parse_item(self)?);
            match self.tokens.peek_kind() {
                TokenKind::Comma => {
                    self.tokens.advance();
                },
                kind if kind == closing => {
                    self.tokens.advance();
                    break;
                },
                _ => {
                    self.expect(closing, closing_text)?;
                    break;
                },
            }
        }
        Ok(items)
    }

    /// Parses a plain identifier and returns its name.
    ///
    /// # Errors
    /// `UnexpectedToken` if the next token is not an identifier.
    pub(super) fn parse_identifier(&mut self) -> ParseResult<String> {
        let token = self.tokens.advance();
        match token.kind {
            TokenKind::Identifier => Ok(token.lexeme),
            TokenKind::EndOfInput => Err(ParseError::UnexpectedEndOfInput { line: token.line }),
            _ => Err(ParseError::UnexpectedToken { token: token.lexeme,
                                                   line:  token.line, }),
        }
    }

    /// Parses one of the type keywords.
    ///
    /// # Errors
    /// `UnexpectedToken` if the next token is not a type keyword.
    pub(super) fn parse_type(&mut self) -> ParseResult<TypeHint> {
        let token = self.tokens.advance();
        Ok(match token.kind {
               TokenKind::Int => TypeHint::Int,
               TokenKind::FloatType => TypeHint::Float,
               TokenKind::StringType => TypeHint::String,
               TokenKind::Bool => TypeHint::Bool,
               TokenKind::Void => TypeHint::Void,
               _ => {
                   return Err(ParseError::UnexpectedToken { token: token.lexeme,
                                                            line:  token.line, });
               },
           })
    }
}

/// Resolves the escape sequences of a string literal body.
///
/// `\n`, `\t`, `\"` and `\\` are translated; any other escaped character
/// stands for itself.
///
/// # Example
/// ```
/// use minic::interpreter::parser::utils::unescape;
///
/// assert_eq!(unescape(r#"a\tb\"c\\"#), "a\tb\"c\\");
/// assert_eq!(unescape(r"\q"), "q");
/// ```
#[must_use]
pub fn unescape(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
