//! Interactive calculator
//!
//! [`Session`] holds the per-run state and turns input lines into
//! [`Outcome`]s; [`LineRepl`] drives it from a rustyline prompt.

pub mod commands;
pub mod line;
pub mod session;

pub use commands::{Command, ConvertArgs};
pub use line::{CalcHelper, LineRepl};
pub use session::{format_result, substitute_ans, Outcome, Session};
