use std::fs::{self};

use minic::{
    Session,
    error::{Error, ParseError, RuntimeError},
    get_result,
    interpreter::value::core::Value,
};
use walkdir::WalkDir;

#[test]
fn golden_scripts_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mc"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read \
                                                                     {expected_path:?}: {e}")
                                                         });

        let actual = run_transcript(&script);
        let expected: Vec<&str> = expected.lines().collect();
        assert_eq!(actual, expected, "Transcript of {path:?} differs");
        count += 1;
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// Runs a script statement by statement and renders every outcome the way
/// the interactive prompt shows it.
fn run_transcript(script: &str) -> Vec<String> {
    Session::new(script.lines().map(String::from)).filter_map(|outcome| match outcome {
                                                       Ok(Value::Null) => None,
                                                       Ok(value) => Some(value.to_string()),
                                                       Err(e) => Some(format!("error: {e}")),
                                                   })
                                                   .collect()
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected.into(), "Script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_int(src: &str, expected: i64) {
    assert_value(src, expected);
}

fn assert_float(src: &str, expected: f64) {
    assert_value(src, expected);
}

fn runtime_error(src: &str) -> RuntimeError {
    match first_error(src) {
        Error::Runtime(e) => e,
        Error::Parse(e) => panic!("Expected a runtime error, got: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match first_error(src) {
        Error::Parse(e) => e,
        Error::Runtime(e) => panic!("Expected a parse error, got: {e}"),
    }
}

fn first_error(src: &str) -> Error {
    Session::new(src.lines().map(String::from)).find_map(Result::err)
                                               .unwrap_or_else(|| {
                                                   panic!("Script succeeded but was expected to \
                                                           fail: {src}")
                                               })
}

#[test]
fn precedence_and_associativity() {
    assert_int("2 + 3 * 4;", 14);
    assert_int("(2 + 3) * 4;", 20);
    assert_int("10 - 4 - 3;", 3);
    assert_int("2 * 3 % 4;", 2);
    assert_int("7 % 4 * 2;", 7);
    assert_int("1 << 2 + 1;", 5);
    assert_value("1 + 2 < 4 && 2 == 2;", true);
}

#[test]
fn unary_operators() {
    assert_int("-2 * 3;", -6);
    assert_int("-(2 + 3);", -5);
    assert_int("+4;", 4);
    assert_value("!true;", false);
    assert_value("!(1 < 2);", false);
    assert!(matches!(runtime_error("-\"a\";"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("!1;"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn numeric_promotion() {
    assert_float("1 + 2.5;", 3.5);
    assert_int("5 / 2;", 2);
    assert_int("-7 / 2;", -3);
    assert_float("5.0 / 2;", 2.5);
    assert_float("2 * 1.5;", 3.0);
    assert!(matches!(runtime_error("9007199254740993 + 0.5;"),
                     RuntimeError::PrecisionLoss { .. }));
}

#[test]
fn string_concatenation() {
    assert_value("\"ab\" + \"cd\";", "abcd");
    assert_value("\"n=\" + 5;", "n=5");
    assert_value("\"a\\tb\";", "a\tb");
    assert!(matches!(runtime_error("\"ab\" - \"cd\";"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(runtime_error("1 / 0;"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_error("1.0 / 0;"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("5 % 0;"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("9223372036854775807 + 1;"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("1 << 64;"), RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("1.5 % 2;"), RuntimeError::TypeMismatch { .. }));
    assert_eq!(parse_error("9223372036854775808;"), ParseError::LiteralTooLarge { line: 1 });
}

#[test]
fn comparisons_use_epsilon_for_floats() {
    let setup = "float a, b; a = 1.00005; b = 1.0001;";
    assert_value(&format!("{setup} a == b;"), true);
    assert_value(&format!("{setup} a == (b + 1.0);"), false);
    assert_value(&format!("{setup} a <= b;"), true);
    assert_value(&format!("{setup} a < b;"), false);
    assert_value("1.0 < 1.00001;", false);
    assert_value("1 < 2;", true);
    assert_value("2 <= 2;", true);
    assert_value("3 != 3;", false);
}

#[test]
fn string_and_boolean_comparisons() {
    assert_value("\"abc\" < \"abd\";", true);
    assert_value("\"b\" >= \"a\";", true);
    assert_value("true == false;", false);
    assert_value("true != false;", true);
    assert!(matches!(runtime_error("true < false;"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("1 == \"1\";"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn logical_operators_short_circuit() {
    assert_int("int x; false && (x = 1) == 1; x;", 0);
    assert_int("int x; true || (x = 1) == 1; x;", 0);
    assert_value("true || 1;", true);
    assert_value("false || true;", true);
    assert!(matches!(runtime_error("1 && true;"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("true && 1;"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn declarations_have_defaults() {
    assert_int("int i; i;", 0);
    assert_float("float f; f;", 0.0);
    assert_value("string s; s;", "");
    assert_value("bool b; b;", false);
    assert_int("int a, b, c; a + b + c;", 0);
    assert_int("int i;", 0);
    assert_float("float f;", 0.0);
    assert_value("string s;", "");
    assert_value("bool b;", false);
    assert_int("int a, b;", 0);
    assert!(matches!(parse_error("void v;"), ParseError::InvalidType { .. }));
}

#[test]
fn assignment_is_right_associative() {
    assert_int("int a, b; a = b = 3; a + b;", 6);
    assert_int("int a; a = 4;", 4);
    assert!(matches!(parse_error("int a; a + 1 = 3;"),
                     ParseError::InvalidAssignmentTarget { .. }));
}

#[test]
fn compound_assignments() {
    assert_int("int x; x = 3; x += 4;", 7);
    assert_int("int x; x = 3; x -= 4;", -1);
    assert_int("int x; x = 3; x *= 4; x;", 12);
    assert_int("int x; x = 12; x /= 5;", 2);
    assert_float("float f; f = 1.5; f *= 2.0;", 3.0);
    assert_value("string s; s = \"a\"; s += \"b\";", "ab");
    assert!(matches!(runtime_error("string s; s = \"a\"; s -= \"b\";"),
                     RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error("int x; x += 1.5;"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn increment_and_decrement() {
    assert_int("int x; x = 5; x++;", 5);
    assert_int("int x; x = 5; x++; x;", 6);
    assert_int("int x; x = 5; ++x;", 6);
    assert_int("int x; x = 5; x--; x;", 4);
    assert_int("int x; x = 5; --x;", 4);
    assert_float("float f; f = 0.5; ++f;", 1.5);
    assert!(matches!(runtime_error("string s; s++;"), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(parse_error("++5;"), ParseError::InvalidAssignmentTarget { .. }));
    assert!(matches!(parse_error("5++;"), ParseError::InvalidAssignmentTarget { .. }));
}

#[test]
fn functions_and_closures() {
    assert_int("int inc(int x) { return x + 1; } inc(5);", 6);
    assert_int("int base; base = 10; int add(int x) { return x + base; } base = 20; add(1);",
                 21);
    assert_int("int outer() { int k; k = 7; int inner() { return k * 2; } return inner(); } \
                  outer();",
                 14);
    assert_eq!(parse_error("int inc(int x) { return x + 1; } inc(5); x;"),
               ParseError::UndefinedIdentifier { name: "x".to_string(),
                                                 line: 1 });
}

#[test]
fn recursion() {
    assert_int("int fact(int n) { if (n <= 1) return 1; return n * fact(n - 1); } fact(10);",
                 3_628_800);
    assert_int("int fib(int n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); } \
                  fib(15);",
                 610);
}

#[test]
fn function_declaration_yields_function() {
    let value = get_result("int one() { return 1; }").unwrap();
    assert_eq!(value.to_string(), "<fn one>");
    assert_eq!(value.type_name(), "function");
}

#[test]
fn void_functions() {
    assert_value("void f() { return; } f();", Value::Null);
    assert_int("int n; void f() { n = 3; } f(); n;", 3);
    assert!(matches!(runtime_error("void f() { return 1; } f();"),
                     RuntimeError::VoidReturnViolation { .. }));
}

#[test]
fn reference_parameters() {
    assert_int("void swap(int& a, int& b) { int t; t = a; a = b; b = t; } int x, y; x = 1; y = \
                  2; swap(x, y); x * 10 + y;",
                 21);
    assert_int("void bump(int c) { c++; } int n; bump(n); n;", 0);
    assert!(matches!(runtime_error("void f(int& a) { a = 1; } f(3);"),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn call_errors() {
    assert_eq!(runtime_error("int f(int a) { return a; } f(1, 2);"),
               RuntimeError::ArityMismatch { name:     "f".to_string(),
                                             expected: 1,
                                             found:    2,
                                             line:     1, });
    assert!(matches!(parse_error("int x; x(1);"), ParseError::NotCallable { .. }));
    assert!(matches!(parse_error("int f(int f) { return f(1); }"),
                     ParseError::NotCallable { .. }));
    assert!(matches!(parse_error("g(1);"), ParseError::UndefinedIdentifier { .. }));
    assert!(matches!(parse_error("void f(void a) { }"), ParseError::InvalidType { .. }));
}

#[test]
fn if_else_and_blocks() {
    assert_int("int x; x = 3; if (x > 2) { x = 10; } else { x = 20; } x;", 10);
    assert_int("int x; x = 1; if (x > 2) { x = 10; } else { x = 20; } x;", 20);
    assert_int("int x; if (false) x = 1; x;", 0);
    assert_int("{ 1; 2; }", 2);
    assert_int("int x; { int x; x = 5; } x;", 0);
    assert_int("int x; { x = 5; } x;", 5);
    assert!(matches!(parse_error("{ int y; y = 1; } y;"),
                     ParseError::UndefinedIdentifier { .. }));
    assert!(matches!(runtime_error("if (1) { }"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn top_level_return_is_unwrapped() {
    assert_int("return 3;", 3);
    assert_value("return;", Value::Null);
}

#[test]
fn syntax_errors() {
    assert!(matches!(parse_error("1 2;"), ParseError::NoInfixHandler { .. }));
    assert!(matches!(parse_error("* 2;"), ParseError::NoPrefixHandler { .. }));
    assert!(matches!(parse_error("1 + 2"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("(1 + 2;"),
                     ParseError::UnterminatedStatement { expected: ")", .. }));
    assert_eq!(parse_error("1 $ 2;"),
               ParseError::UnexpectedToken { token: "$".to_string(),
                                             line:  1, });
}

#[test]
fn comments_are_ignored() {
    assert_int("1 + 1; // two", 2);
    assert_success("// nothing but a comment");
}

#[test]
fn literals_round_trip_through_inspect() {
    let values = [Value::Integer(42),
                  Value::Integer(-7),
                  Value::Float(2.5),
                  Value::Float(-0.1),
                  Value::Float(1e-7),
                  Value::Boolean(true),
                  Value::from("he said \"hi\"\n\\")];

    for value in values {
        let source = format!("{};", value.inspect());
        assert_value(&source, value);
    }
}

#[test]
fn display_rounds_floats() {
    assert_eq!(Value::Float(3.14159).to_string(), "3.142");
    assert_eq!(Value::Float(2.0).to_string(), "2.000");
    assert_eq!(Value::Null.to_string(), "");
}

#[test]
fn quit_stops_the_script() {
    assert_int("1; quit 2;", 1);
    assert_failure("int x; x = y;");
}
