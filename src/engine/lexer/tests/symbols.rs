//! 运算符、括号、函数与常量

use crate::engine::lexer::{tokenize, Constant, Function, Operator, Token};

#[test]
fn test_each_operator() {
    let cases = [
        ("+", Operator::Plus),
        ("-", Operator::Minus),
        ("*", Operator::Star),
        ("/", Operator::Slash),
        ("^", Operator::Caret),
        ("%", Operator::Percent),
    ];
    for (src, op) in cases {
        assert_eq!(tokenize(src).unwrap(), vec![Token::Operator(op)], "{}", src);
    }
}

#[test]
fn test_operator_precedence_ranks() {
    assert_eq!(Operator::Plus.precedence(), 1);
    assert_eq!(Operator::Minus.precedence(), 1);
    assert_eq!(Operator::Star.precedence(), 2);
    assert_eq!(Operator::Slash.precedence(), 2);
    assert_eq!(Operator::Percent.precedence(), 2);
    assert_eq!(Operator::Caret.precedence(), 3);
}

#[test]
fn test_parens() {
    assert_eq!(
        tokenize("()").unwrap(),
        vec![Token::OpenParen, Token::CloseParen]
    );
}

#[test]
fn test_every_function_name() {
    for func in Function::ALL {
        assert_eq!(
            tokenize(func.name()).unwrap(),
            vec![Token::Function(func)],
            "{}",
            func.name()
        );
    }
}

#[test]
fn test_constants() {
    assert_eq!(tokenize("pi").unwrap(), vec![Token::Constant(Constant::Pi)]);
    assert_eq!(tokenize("e").unwrap(), vec![Token::Constant(Constant::E)]);
}

#[test]
fn test_adjacent_keywords() {
    assert_eq!(
        tokenize("pie").unwrap(),
        vec![Token::Constant(Constant::Pi), Token::Constant(Constant::E)]
    );
    assert_eq!(
        tokenize("lnsqrt").unwrap(),
        vec![Token::Function(Function::Ln), Token::Function(Function::Sqrt)]
    );
}

#[test]
fn test_number_then_constant() {
    assert_eq!(
        tokenize("2e").unwrap(),
        vec![Token::Number(2.0), Token::Constant(Constant::E)]
    );
}

#[test]
fn test_keywords_are_lowercase_only() {
    assert!(tokenize("SIN(1)").is_err());
    assert!(tokenize(&crate::engine::normalize("SIN(1)")).is_ok());
}
