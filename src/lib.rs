//! termcalc - a terminal calculator
//!
//! Evaluates infix arithmetic with `+ - * / % ^`, parentheses, the functions
//! `sin cos tan sqrt log ln abs` and the constants `pi` and `e`. Around the
//! engine sit unit conversion, a calculation history and an interactive REPL.
//!
//! # Example
//!
//! ```
//! use termcalc::{calculate, Result};
//!
//! fn main() -> Result<()> {
//!     assert_eq!(calculate("2 + 3 * 4")?, 14.0);
//!     assert_eq!(calculate("2 ^ 3 ^ 2")?, 64.0);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/termcalc")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod convert;
pub mod engine;
pub mod history;
pub mod repl;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use engine::{evaluate_expression, EngineError};

use tracing::debug;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Program name
pub const NAME: &str = "termcalc";

/// Evaluate one expression
///
/// `ans` is not available here; it belongs to a [`repl::Session`].
pub fn calculate(expression: &str) -> Result<f64> {
    debug!(expression, "calculate called");
    let value = evaluate_expression(expression)
        .with_context(|| format!("Failed to evaluate '{}'", expression.trim()))?;
    debug!(value, "calculation complete");
    Ok(value)
}
