use minic::{
    ast::{AssignOperator, BinaryOperator, Expr, Statement, UnaryOperator, UpdateOperator},
    error::ParseError,
    interpreter::{
        environment::Environment,
        lexer::TokenKind,
        parser::{core::Parser, precedence::Precedence},
        value::core::Value,
    },
};

fn parse_one(source: &str) -> (Statement, Environment) {
    let mut env = Environment::new();
    let global = env.global();
    for name in ["a", "b", "x"] {
        env.define(global, name, Value::Integer(0));
    }
    let mut parser = Parser::new(std::iter::once(source.to_string()));
    let statement = parser.parse_statement(&mut env, global)
                          .unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"));
    (statement, env)
}

fn parse_expr(source: &str) -> Expr {
    match parse_one(source).0 {
        Statement::Expression { expr, .. } => expr,
        other => panic!("Expected an expression statement, got {other:?}"),
    }
}

#[test]
fn binding_powers_are_ordered() {
    let order = [TokenKind::Equals,
                 TokenKind::OrOr,
                 TokenKind::AndAnd,
                 TokenKind::EqualEqual,
                 TokenKind::Less,
                 TokenKind::Plus,
                 TokenKind::Percent,
                 TokenKind::Star,
                 TokenKind::LParen];

    for pair in order.windows(2) {
        assert!(Precedence::of(pair[0]) < Precedence::of(pair[1]),
                "{:?} should bind looser than {:?}",
                pair[0],
                pair[1]);
    }
    assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
}

#[test]
fn multiplication_nests_under_addition() {
    let Expr::Binary { op: BinaryOperator::Add, left, right, .. } = parse_expr("1 + 2 * 3;") else {
        panic!("Expected an addition at the root");
    };
    assert!(matches!(*left, Expr::IntLiteral { value: 1, .. }));
    assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Mul, .. }));
}

#[test]
fn subtraction_associates_left() {
    let Expr::Binary { op: BinaryOperator::Sub, left, right, .. } = parse_expr("a - b - 1;")
    else {
        panic!("Expected a subtraction at the root");
    };
    assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Sub, .. }));
    assert!(matches!(*right, Expr::IntLiteral { value: 1, .. }));
}

#[test]
fn assignment_associates_right() {
    let Expr::Assignment { op: AssignOperator::Assign, target, value, .. } =
        parse_expr("a = b += 1;")
    else {
        panic!("Expected an assignment at the root");
    };
    assert_eq!(target, "a");
    assert!(matches!(*value,
                     Expr::Assignment { op: AssignOperator::AddAssign, ref target, .. }
                     if target == "b"));
}

#[test]
fn postfix_update_binds_tighter_than_negation() {
    let Expr::Unary { op: UnaryOperator::Negate, operand, .. } = parse_expr("-x++;") else {
        panic!("Expected a negation at the root");
    };
    assert!(matches!(*operand,
                     Expr::Update { op: UpdateOperator::Increment, is_prefix: false, .. }));
}

#[test]
fn calls_collect_their_arguments() {
    let (statement, mut env) = parse_one("int add(int p, int& q) { return p + q; }");
    let Statement::Function(def) = statement else {
        panic!("Expected a function declaration");
    };
    assert_eq!(def.params.len(), 2);
    assert!(def.params[1].by_reference);

    let global = env.global();
    assert!(matches!(env.get(global, "add"), Some(Value::Function(_))));
    assert!(!env.var_exists(global, "p"));

    let mut parser = Parser::new(std::iter::once("add(1, a * 2);".to_string()));
    let Ok(Statement::Expression { expr: Expr::Call { callee, args, .. }, .. }) =
        parser.parse_statement(&mut env, global)
    else {
        panic!("Expected a call");
    };
    assert_eq!(callee, "add");
    assert_eq!(args.len(), 2);
}

#[test]
fn declarations_list_every_name() {
    let (statement, env) = parse_one("float f, g;");
    let Statement::Declaration { names, .. } = statement else {
        panic!("Expected a declaration");
    };
    assert_eq!(names, ["f", "g"]);
    assert_eq!(env.get(env.global(), "g"), Some(&Value::Float(0.0)));
}

#[test]
fn else_attaches_to_the_if() {
    let (statement, _) = parse_one("if (a < 1) a = 1; else { a = 2; }");
    let Statement::If { else_branch, .. } = statement else {
        panic!("Expected an if statement");
    };
    assert!(matches!(else_branch.as_deref(), Some(Statement::Block { .. })));
}

#[test]
fn errors_are_recorded_until_reset() {
    let mut env = Environment::new();
    let global = env.global();
    let mut parser = Parser::new(std::iter::once("a; 1;".to_string()));

    assert_eq!(parser.parse_statement(&mut env, global),
               Err(ParseError::UndefinedIdentifier { name: "a".to_string(),
                                                     line: 1, }));
    assert_eq!(parser.errors().len(), 1);

    parser.reset();
    assert!(parser.errors().is_empty());
    assert_eq!(parser.peek_kind(), TokenKind::EndOfInput);
}

#[test]
fn parameter_hides_the_function_name() {
    let mut env = Environment::new();
    let global = env.global();
    let mut parser = Parser::new(std::iter::once("int f(int f) { return f(1); }".to_string()));

    assert!(matches!(parser.parse_statement(&mut env, global),
                     Err(ParseError::NotCallable { ref name, line: 1 }) if name == "f"));
}
