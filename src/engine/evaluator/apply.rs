//! Operator, function and constant application

use smallvec::SmallVec;

use super::errors::EvalError;
use super::Pending;
use crate::engine::lexer::{Function, Operator};

/// Operand stack with inline room for typical expressions
pub type Operands = SmallVec<[f64; 16]>;

/// Act on one popped operator-stack entry
pub fn apply(
    entry: Pending,
    operands: &mut Operands,
) -> Result<(), EvalError> {
    match entry {
        Pending::OpenParen => Ok(()),
        Pending::Negate => {
            let value = operands
                .pop()
                .ok_or_else(|| EvalError::InsufficientOperands("operator: -".to_string()))?;
            operands.push(-value);
            Ok(())
        }
        Pending::Function(func) => {
            let value = operands
                .pop()
                .ok_or_else(|| EvalError::InsufficientOperands(func.name().to_string()))?;
            operands.push(call_function(func, value)?);
            Ok(())
        }
        Pending::Constant(constant) => {
            operands.push(constant.value());
            Ok(())
        }
        Pending::Binary(op) => {
            let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                return Err(EvalError::InsufficientOperands(format!(
                    "operator: {}",
                    op.symbol()
                )));
            };
            operands.push(binary(op, left, right)?);
            Ok(())
        }
    }
}

/// Apply a unary function, enforcing its domain
pub fn call_function(
    func: Function,
    value: f64,
) -> Result<f64, EvalError> {
    match func {
        Function::Sin => Ok(value.sin()),
        Function::Cos => Ok(value.cos()),
        Function::Tan => Ok(value.tan()),
        Function::Sqrt if value < 0.0 => Err(EvalError::NegativeSqrt),
        Function::Sqrt => Ok(value.sqrt()),
        Function::Log if value <= 0.0 => Err(EvalError::NonPositiveLog),
        Function::Log => Ok(value.log10()),
        Function::Ln if value <= 0.0 => Err(EvalError::NonPositiveLn),
        Function::Ln => Ok(value.ln()),
        Function::Abs => Ok(value.abs()),
    }
}

/// Apply a binary operator; `left` was pushed before `right`
pub fn binary(
    op: Operator,
    left: f64,
    right: f64,
) -> Result<f64, EvalError> {
    match op {
        Operator::Plus => Ok(left + right),
        Operator::Minus => Ok(left - right),
        Operator::Star => Ok(left * right),
        Operator::Slash if right == 0.0 => Err(EvalError::DivisionByZero),
        Operator::Slash => Ok(left / right),
        Operator::Caret => Ok(left.powf(right)),
        Operator::Percent if right == 0.0 => Err(EvalError::ModuloByZero),
        Operator::Percent => Ok(floored_rem(left, right)),
    }
}

/// Remainder taking the sign of the divisor: `-7 % 3 == 2`, `7 % -3 == -2`
fn floored_rem(
    left: f64,
    right: f64,
) -> f64 {
    let rem = left % right;
    if rem != 0.0 && (rem < 0.0) != (right < 0.0) {
        rem + right
    } else {
        rem
    }
}
