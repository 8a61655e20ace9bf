use log::debug;

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::TokenKind,
        parser::core::Parser,
        token_stream::LineSource,
        value::core::Value,
    },
};

/// Drives the read-parse-evaluate cycle one statement at a time.
///
/// A session owns the parser (and through it the line source) and the
/// evaluation context. Every call to [`next_outcome`](Self::next_outcome)
/// parses exactly one statement, evaluates it in the global scope and hands
/// back its value or error.
///
/// A statement either takes full effect or none:
/// - parsing happens in a throwaway scope that is discarded afterwards, and
///   after a parse error the rest of the offending line is skipped;
/// - the environment records a checkpoint before evaluation and rolls back to
///   it if the statement fails.
///
/// # Example
/// ```
/// use minic::{Session, interpreter::value::core::Value};
///
/// let script = "int x; x = 2 + 3 * 4; y; x;";
/// let mut session = Session::new(script.lines().map(String::from));
///
/// assert_eq!(session.next_outcome().unwrap().unwrap(), Value::Integer(0));
/// assert_eq!(session.next_outcome().unwrap().unwrap(), Value::Integer(14));
/// assert!(session.next_outcome().unwrap().is_err());
/// assert!(session.next_outcome().is_none());
/// ```
pub struct Session<S> {
    parser:   Parser<S>,
    context:  Context,
    finished: bool,
}

impl<S: LineSource> Session<S> {
    /// Creates a session over a line source with a default context.
    pub fn new(source: S) -> Self {
        Self::with_context(source, Context::new())
    }

    /// Creates a session over a line source with the given context.
    pub fn with_context(source: S, context: Context) -> Self {
        Self { parser: Parser::new(source),
               context,
               finished: false }
    }

    /// Runs the next statement.
    ///
    /// # Returns
    /// - `None` once the input is exhausted or `quit` was read.
    /// - `Some(Ok(value))` with the statement's value; a top-level `return`
    ///   is unwrapped.
    /// - `Some(Err(error))` if the statement failed to parse or evaluate. The
    ///   session stays usable.
    pub fn next_outcome(&mut self) -> Option<Result<Value, Error>> {
        if self.finished {
            return None;
        }
        match self.parser.peek_kind() {
            TokenKind::EndOfInput => {
                self.finished = true;
                return None;
            },
            TokenKind::Quit => {
                debug!("quit requested");
                self.parser.skip_token();
                self.finished = true;
                return None;
            },
            _ => {},
        }

        let env = &mut self.context.env;
        let global = env.global();
        let mark = env.mark();
        let scratch = env.new_child(global);
        let parsed = self.parser.parse_statement(env, scratch);
        env.truncate(mark);

        let statement = match parsed {
            Ok(statement) => statement,
            Err(e) => {
                self.parser.reset();
                return Some(Err(e.into()));
            },
        };
        debug!("parsed {statement:?}");

        self.context.env.checkpoint();
        match self.context.eval_statement(&statement, global) {
            Ok(value) => {
                self.context.env.commit();
                Some(Ok(value.unwrap_return()))
            },
            Err(e) => {
                debug!("rolling back: {e}");
                self.context.env.rollback();
                Some(Err(e.into()))
            },
        }
    }

    /// Looks up a global binding.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<&Value> {
        let env = &self.context.env;
        env.get(env.global(), name)
    }
}

impl<S: LineSource> Iterator for Session<S> {
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_outcome()
    }
}
