//! Evaluation errors

/// Evaluation error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Not enough operands for {0}")]
    InsufficientOperands(String),
    #[error("Mismatched parentheses")]
    MismatchedParens,
    #[error("Unknown token: {0}")]
    UnknownToken(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
    #[error("Cannot take square root of negative number")]
    NegativeSqrt,
    #[error("Cannot take log of non-positive number")]
    NonPositiveLog,
    #[error("Cannot take natural log of non-positive number")]
    NonPositiveLn,
    #[error("Invalid expression")]
    InvalidExpression,
}
