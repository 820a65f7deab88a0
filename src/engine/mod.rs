//! Expression engine
//!
//! ```text
//! raw text → normalize → tokenize → evaluate → f64
//! ```
//!
//! The engine is pure: every call owns its own stacks and nothing survives
//! between calls, so it can be used from any number of threads at once.
//! Session state such as the previous result belongs to the caller and
//! reaches the engine only as substituted text.

pub mod evaluator;
pub mod lexer;

pub use evaluator::{evaluate, EvalError, Evaluator};
pub use lexer::{tokenize, Constant, Function, LexError, Operator, Token};

/// Any failure from text to value
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Case-fold expression text
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Normalize, tokenize and evaluate `text`
///
/// # Example
///
/// ```
/// use termcalc::engine::evaluate_expression;
///
/// assert_eq!(evaluate_expression("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate_expression("SQRT(16) + 1").unwrap(), 5.0);
/// ```
pub fn evaluate_expression(text: &str) -> Result<f64, EngineError> {
    let tokens = tokenize(&normalize(text))?;
    Ok(evaluate(&tokens)?)
}
