//! End-to-end expression tests
//!
//! Text in, value or error out, through the public entry points.

use termcalc::engine::{evaluate, evaluate_expression, EngineError, EvalError, LexError, Token};
use termcalc::calculate;

fn value(text: &str) -> f64 {
    evaluate_expression(text).unwrap()
}

fn eval_error(text: &str) -> EvalError {
    match evaluate_expression(text) {
        Err(EngineError::Eval(err)) => err,
        other => panic!("expected an evaluation error for {:?}, got {:?}", text, other),
    }
}

#[test]
fn test_precedence_and_grouping() {
    assert_eq!(value("2 + 3 * 4"), 14.0);
    assert_eq!(value("(2 + 3) * 4"), 20.0);
    assert_eq!(value("10 - 4 - 3"), 3.0);
    assert_eq!(value("2 ^ 3 ^ 2"), 64.0);
    assert_eq!(value("4 / 2"), 2.0);
    assert_eq!(value("7 % 4 * 2"), 6.0);
}

#[test]
fn test_functions_and_constants() {
    assert_eq!(value("sqrt(16) + 1"), 5.0);
    assert_eq!(value("abs(0 - 3)"), 3.0);
    assert_eq!(value("log(1000)").round(), 3.0);
    assert!((value("pi") - 3.14159265).abs() < 1e-6);
    assert!((value("e") - 2.71828183).abs() < 1e-6);
    assert!((value("2 * pi") - std::f64::consts::TAU).abs() < 1e-12);
    assert!((value("ln(e)") - 1.0).abs() < 1e-12);
}

#[test]
fn test_case_and_whitespace_insensitive() {
    assert_eq!(value("SQRT( 16 )"), 4.0);
    assert_eq!(value("Pi"), std::f64::consts::PI);
    assert_eq!(value("1 2 + 1"), 13.0);
}

#[test]
fn test_domain_errors() {
    assert_eq!(eval_error("sqrt(-1)"), EvalError::NegativeSqrt);
    assert_eq!(eval_error("log(0)"), EvalError::NonPositiveLog);
    assert_eq!(eval_error("ln(-5)"), EvalError::NonPositiveLn);
    assert_eq!(eval_error("5 / 0"), EvalError::DivisionByZero);
    assert_eq!(eval_error("5 % 0"), EvalError::ModuloByZero);
}

#[test]
fn test_structural_errors() {
    assert_eq!(eval_error("(1 + 2"), EvalError::MismatchedParens);
    assert_eq!(eval_error("1 + 2)"), EvalError::MismatchedParens);
    assert!(matches!(eval_error("1 +"), EvalError::InsufficientOperands(_)));
    assert_eq!(eval_error("(1)(2)"), EvalError::InvalidExpression);
    assert_eq!(
        evaluate(&[Token::Number(1.0), Token::Number(2.0)]),
        Err(EvalError::InvalidExpression)
    );
}

#[test]
fn test_unrecognized_input() {
    match evaluate_expression("1 & 2") {
        Err(EngineError::Lex(LexError::UnrecognizedSubstring { text, offset })) => {
            assert_eq!(text, "&");
            assert_eq!(offset, 1);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_error_messages() {
    let message = |text: &str| evaluate_expression(text).unwrap_err().to_string();
    assert_eq!(message("5 / 0"), "Division by zero");
    assert_eq!(message("1 & 2"), "Unrecognized input '&' at position 1");
}

#[test]
fn test_calculate_adds_context() {
    let err = calculate("  5 / 0 ").unwrap_err();
    assert_eq!(err.to_string(), "Failed to evaluate '5 / 0'");
    assert_eq!(err.root_cause().to_string(), "Division by zero");
    assert_eq!(calculate("-2 ^ 2").unwrap(), -4.0);
}

#[test]
fn test_concurrent_evaluation() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || evaluate_expression(&format!("{} * 2 + 1", i)).unwrap()))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), (i * 2 + 1) as f64);
    }
}
