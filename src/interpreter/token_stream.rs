use std::collections::VecDeque;

use log::trace;

use crate::interpreter::lexer::{Token, TokenKind, tokenize_line};

/// A provider of source text, one line at a time.
///
/// `next_line` may block (a terminal waiting for the user, for instance).
/// Returning `None` means the source is exhausted for good.
///
/// Every `Iterator<Item = String>` is a line source, so a script can be fed
/// with `source.lines().map(String::from)`.
pub trait LineSource {
    /// Produces the next line, without its terminator.
    fn next_line(&mut self) -> Option<String>;
}

impl<I> LineSource for I where I: Iterator<Item = String>
{
    fn next_line(&mut self) -> Option<String> {
        self.next()
    }
}

/// A lazily filled cursor over the tokens of a [`LineSource`].
///
/// The stream never reads ahead of the token that is currently needed: a new
/// line is requested only when the pending buffer is empty and the parser
/// asks for the current token. A statement typed on one line can therefore be
/// evaluated before the next line is requested, while an expression that
/// continues on the next line is completed transparently.
///
/// Once the source is exhausted the stream keeps answering with a synthetic
/// [`TokenKind::EndOfInput`] token.
pub struct TokenStream<S> {
    source:    S,
    pending:   VecDeque<Token>,
    line:      usize,
    exhausted: bool,
    end:       Token,
}

impl<S: LineSource> TokenStream<S> {
    /// Creates a stream over the given line source. No line is read yet.
    pub fn new(source: S) -> Self {
        Self { source,
               pending: VecDeque::new(),
               line: 0,
               exhausted: false,
               end: Token::new(TokenKind::EndOfInput, "", 0) }
    }

    /// Pulls lines until at least one token is pending or the source runs dry.
    fn fill(&mut self) {
        while self.pending.is_empty() && !self.exhausted {
            match self.source.next_line() {
                Some(text) => {
                    self.line += 1;
                    trace!("pulled line {}: {text:?}", self.line);
                    self.pending.extend(tokenize_line(&text, self.line));
                },
                None => {
                    trace!("line source exhausted after {} lines", self.line);
                    self.exhausted = true;
                    self.end.line = self.line;
                },
            }
        }
    }

    /// Returns the token the parser is looking at, pulling input if needed.
    ///
    /// # Example
    /// ```
    /// use minic::interpreter::{lexer::TokenKind, token_stream::TokenStream};
    ///
    /// let mut stream = TokenStream::new(vec!["".to_string(), "x".to_string()].into_iter());
    /// assert_eq!(stream.current().kind, TokenKind::Identifier);
    /// assert_eq!(stream.current().line, 2);
    /// ```
    pub fn current(&mut self) -> &Token {
        self.fill();
        self.pending.front().unwrap_or(&self.end)
    }

    /// Returns the kind of the current token.
    pub fn peek_kind(&mut self) -> TokenKind {
        self.current().kind
    }

    /// Consumes and returns the current token.
    ///
    /// At the end of input this keeps returning the `EndOfInput` token.
    pub fn advance(&mut self) -> Token {
        self.fill();
        self.pending.pop_front().unwrap_or_else(|| self.end.clone())
    }

    /// Drops every token that has been read from the source but not consumed
    /// yet, which skips the rest of the current line.
    pub fn discard_pending(&mut self) {
        if !self.pending.is_empty() {
            trace!("discarding {} pending tokens", self.pending.len());
        }
        self.pending.clear();
    }

    /// Number of lines pulled from the source so far.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}
