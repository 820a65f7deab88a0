//! Evaluator tests module
//!
//! - precedence: 优先级、结合性与括号
//! - functions: 函数与常量
//! - errors: 错误分类


use crate::engine::{evaluate, tokenize, EvalError};

/// Tokenize then evaluate, panicking on lexer errors
pub(super) fn eval(src: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("lexing {:?} failed: {}", src, e));
    evaluate(&tokens)
}

pub(super) fn assert_close(
    actual: f64,
    expected: f64,
) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
