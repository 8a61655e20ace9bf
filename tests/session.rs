use std::{cell::Cell, collections::VecDeque, rc::Rc, thread};

use minic::{
    Session,
    error::{Error, ParseError, RuntimeError},
    interpreter::{evaluator::core::Context, value::core::Value},
};

/// Serves fixed lines and counts how many were requested.
struct CountingLines {
    lines:  VecDeque<String>,
    pulled: Rc<Cell<usize>>,
}

impl CountingLines {
    fn new(lines: &[&str]) -> (Self, Rc<Cell<usize>>) {
        let pulled = Rc::new(Cell::new(0));
        (Self { lines:  lines.iter().map(ToString::to_string).collect(),
                pulled: Rc::clone(&pulled), },
         pulled)
    }
}

impl Iterator for CountingLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = self.lines.pop_front()?;
        self.pulled.set(self.pulled.get() + 1);
        Some(line)
    }
}

fn session(lines: &[&str]) -> Session<impl Iterator<Item = String>> {
    Session::new(lines.iter().map(ToString::to_string).collect::<Vec<_>>().into_iter())
}

fn next_value<S: Iterator<Item = String>>(session: &mut Session<S>) -> Value {
    match session.next_outcome() {
        Some(Ok(value)) => value,
        Some(Err(e)) => panic!("Statement failed: {e}"),
        None => panic!("Session ended early"),
    }
}

fn next_error<S: Iterator<Item = String>>(session: &mut Session<S>) -> Error {
    match session.next_outcome() {
        Some(Err(e)) => e,
        Some(Ok(value)) => panic!("Statement succeeded with {value:?}"),
        None => panic!("Session ended early"),
    }
}

#[test]
fn lines_are_pulled_on_demand() {
    let (source, pulled) = CountingLines::new(&["1;", "2;", "3;"]);
    let mut session = Session::new(source);

    assert_eq!(next_value(&mut session), Value::Integer(1));
    assert_eq!(pulled.get(), 1);
    assert_eq!(next_value(&mut session), Value::Integer(2));
    assert_eq!(pulled.get(), 2);
}

#[test]
fn statements_continue_across_lines() {
    let mut session = session(&["int x;", "x = 1 +", "", "2;", "x;"]);

    assert_eq!(next_value(&mut session), Value::Integer(0));
    assert_eq!(next_value(&mut session), Value::Integer(3));
    assert_eq!(next_value(&mut session), Value::Integer(3));
    assert!(session.next_outcome().is_none());
}

#[test]
fn parse_error_discards_the_rest_of_the_line() {
    let mut session = session(&["int x; y; x = 5;", "x = 7;", "x;"]);

    assert_eq!(next_value(&mut session), Value::Integer(0));
    assert!(matches!(next_error(&mut session),
                     Error::Parse(ParseError::UndefinedIdentifier { line: 1, .. })));
    assert_eq!(next_value(&mut session), Value::Integer(7));
    assert_eq!(next_value(&mut session), Value::Integer(7));
}

#[test]
fn failed_parse_leaves_no_bindings() {
    let mut session = session(&["int f(int a) { return a + ; }", "a;", "f;"]);

    assert!(matches!(next_error(&mut session), Error::Parse(_)));
    assert!(matches!(next_error(&mut session),
                     Error::Parse(ParseError::UndefinedIdentifier { .. })));
    assert!(matches!(next_error(&mut session),
                     Error::Parse(ParseError::UndefinedIdentifier { .. })));
    assert!(session.global("f").is_none());
}

#[test]
fn runtime_error_rolls_back_assignments() {
    let mut session = session(&["int x; x = 1;", "x = 5 + (x = 100) * \"s\";", "x;"]);

    next_value(&mut session);
    next_value(&mut session);
    assert!(matches!(next_error(&mut session),
                     Error::Runtime(RuntimeError::TypeMismatch { line: 2, .. })));
    assert_eq!(next_value(&mut session), Value::Integer(1));
}

#[test]
fn runtime_error_rolls_back_blocks() {
    let mut session = session(&["int z;", "{ z = 9; z / 0; }", "z;"]);

    next_value(&mut session);
    assert!(matches!(next_error(&mut session),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert_eq!(session.global("z"), Some(&Value::Integer(0)));
    assert_eq!(next_value(&mut session), Value::Integer(0));
}

#[test]
fn declarations_persist_between_statements() {
    let mut session = session(&["int square(int n) { return n * n; }", "int y;", "y = square(7);"]);

    assert!(matches!(next_value(&mut session), Value::Function(_)));
    next_value(&mut session);
    next_value(&mut session);
    assert_eq!(session.global("y"), Some(&Value::Integer(49)));
}

#[test]
fn quit_ends_the_session() {
    let (source, pulled) = CountingLines::new(&["1;", "quit", "2;"]);
    let mut session = Session::new(source);

    assert_eq!(next_value(&mut session), Value::Integer(1));
    assert!(session.next_outcome().is_none());
    assert!(session.next_outcome().is_none());
    assert_eq!(pulled.get(), 2);
}

#[test]
fn if_waits_for_a_possible_else() {
    let (source, pulled) = CountingLines::new(&["int x;", "if (true) x = 1;", "else x = 2;", "x;"]);
    let mut session = Session::new(source);

    next_value(&mut session);
    next_value(&mut session);
    assert_eq!(pulled.get(), 3);
    assert_eq!(next_value(&mut session), Value::Integer(1));
}

#[test]
fn call_depth_limit_is_recoverable() {
    let lines = ["int down(int n) { if (n == 0) return 0; return down(n - 1); }",
                 "int y;",
                 "y = down(100);",
                 "down(10);",
                 "y;"];
    let context = Context::new().with_max_depth(50);
    let mut session = Session::with_context(lines.iter().map(ToString::to_string), context);

    next_value(&mut session);
    next_value(&mut session);
    assert!(matches!(next_error(&mut session),
                     Error::Runtime(RuntimeError::RecursionLimit { limit: 50, line: 1 })));
    assert_eq!(next_value(&mut session), Value::Integer(0));
    assert_eq!(next_value(&mut session), Value::Integer(0));
}

#[test]
fn runaway_recursion_does_not_end_the_session() {
    let interpreter = thread::Builder::new().stack_size(256 * 1024 * 1024).spawn(|| {
        let mut session = session(&["int f(int n) { return f(n + 1); }",
                                    "f(1000000);",
                                    "int z;",
                                    "z;"]);

        next_value(&mut session);
        assert!(matches!(next_error(&mut session),
                         Error::Runtime(RuntimeError::RecursionLimit { limit: 1000, .. })));
        assert_eq!(next_value(&mut session), Value::Integer(0));
        assert_eq!(next_value(&mut session), Value::Integer(0));
    });

    interpreter.unwrap().join().unwrap();
}
