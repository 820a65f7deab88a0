//! Dual-stack expression evaluator
//!
//! Consumes a token sequence left to right, keeping an operand stack of
//! values and an operator stack of pending entries. Binary operators are
//! resolved by precedence on the way in; whatever is left is drained in
//! LIFO order once the input is exhausted.
//!
//! # Observable quirks
//!
//! - Every binary operator is left-associative, `^` included:
//!   `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2 = 64`.
//! - A function is applied by `)` only when it sits directly below the
//!   matching `(`. Without parentheses it waits on the operator stack
//!   until the drain.
//! - Functions and constants are not binary operators, so they stop the
//!   precedence loop. `2 * pi` works, `pi * 2` runs out of operands;
//!   `(pi) * 2` resolves the constant first.
//!
//! A `-` in prefix position (at the start, after `(`, after another
//! operator or after a function name) is negation. It binds tighter than
//! `*` and looser than `^`, so `-2 ^ 2 = -4` and `2 * -3 = -6`.

pub mod apply;
pub mod errors;

#[cfg(test)]
mod tests;

use smallvec::SmallVec;
use tracing::debug;

use crate::engine::lexer::{Constant, Function, Operator, Token};
pub use apply::Operands;
pub use errors::EvalError;

/// Operator-stack entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pending {
    Binary(Operator),
    Negate,
    Function(Function),
    Constant(Constant),
    OpenParen,
}

impl Pending {
    /// Rank used by the precedence loop, or `None` for entries that stop it.
    /// Binary ranks are doubled so negation can sit between `*` and `^`.
    fn rank(self) -> Option<u8> {
        match self {
            Pending::Binary(op) => Some(op.precedence() * 2),
            Pending::Negate => Some(5),
            Pending::Function(_) | Pending::Constant(_) | Pending::OpenParen => None,
        }
    }
}

/// Evaluation state for one expression
///
/// Both stacks are owned by a single `evaluate` call and dropped with it.
#[derive(Debug)]
pub struct Evaluator {
    operands: Operands,
    operators: SmallVec<[Pending; 16]>,
    /// True when the next token starts an operand
    expect_operand: bool,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            operands: Operands::new(),
            operators: SmallVec::new(),
            expect_operand: true,
        }
    }

    /// Run the whole token sequence and return the single result
    pub fn evaluate(
        mut self,
        tokens: &[Token],
    ) -> Result<f64, EvalError> {
        for token in tokens {
            self.scan(token)?;
        }
        self.drain()?;

        match self.operands.as_slice() {
            [value] => Ok(*value),
            rest => {
                debug!(operands = rest.len(), "operand stack not reduced to one value");
                Err(EvalError::InvalidExpression)
            }
        }
    }

    /// Scanning state: consume one input token
    fn scan(
        &mut self,
        token: &Token,
    ) -> Result<(), EvalError> {
        let prefix = self.expect_operand;
        self.expect_operand = matches!(
            token,
            Token::Operator(_) | Token::Function(_) | Token::OpenParen
        );

        match *token {
            Token::Number(value) if !value.is_nan() => {
                self.operands.push(value);
                Ok(())
            }
            Token::Number(_) => Err(EvalError::UnknownToken(token.to_string())),
            Token::Function(func) => {
                self.operators.push(Pending::Function(func));
                Ok(())
            }
            Token::Constant(constant) => {
                self.operators.push(Pending::Constant(constant));
                Ok(())
            }
            Token::OpenParen => {
                self.operators.push(Pending::OpenParen);
                Ok(())
            }
            Token::CloseParen => self.close_paren(),
            Token::Operator(Operator::Minus) if prefix => {
                self.operators.push(Pending::Negate);
                Ok(())
            }
            Token::Operator(op) => self.push_binary(op),
        }
    }

    fn close_paren(&mut self) -> Result<(), EvalError> {
        loop {
            match self.operators.pop() {
                None => return Err(EvalError::MismatchedParens),
                Some(Pending::OpenParen) => break,
                Some(entry) => apply::apply(entry, &mut self.operands)?,
            }
        }

        if let Some(&Pending::Function(func)) = self.operators.last() {
            self.operators.pop();
            apply::apply(Pending::Function(func), &mut self.operands)?;
        }
        Ok(())
    }

    fn push_binary(
        &mut self,
        incoming: Operator,
    ) -> Result<(), EvalError> {
        let incoming_rank = incoming.precedence() * 2;
        while let Some(&top) = self.operators.last() {
            match top.rank() {
                Some(rank) if rank >= incoming_rank => {
                    self.operators.pop();
                    apply::apply(top, &mut self.operands)?;
                }
                _ => break,
            }
        }
        self.operators.push(Pending::Binary(incoming));
        Ok(())
    }

    /// Draining state: apply everything left on the operator stack
    fn drain(&mut self) -> Result<(), EvalError> {
        while let Some(entry) = self.operators.pop() {
            if entry == Pending::OpenParen {
                return Err(EvalError::MismatchedParens);
            }
            apply::apply(entry, &mut self.operands)?;
        }
        Ok(())
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a token sequence
pub fn evaluate(tokens: &[Token]) -> Result<f64, EvalError> {
    debug!(tokens = tokens.len(), "evaluating");
    let result = Evaluator::new().evaluate(tokens);
    match &result {
        Ok(value) => debug!(%value, "evaluation complete"),
        Err(err) => debug!(%err, "evaluation failed"),
    }
    result
}
